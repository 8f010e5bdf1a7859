use crate::query::TermLists;

/// Tests candidate text against a compiled query: a candidate matches when
/// any disjunct has all of its inclusions present as substrings and none of
/// its exclusions. Zero disjuncts (the empty query) match everything.
///
/// Case-insensitive matching folds the term lists once up front and the
/// candidate once per call.
#[derive(Clone, Debug)]
pub struct Matcher {
	queries: Vec<TermLists>,
	case_sensitive: bool,
}

impl Matcher {
	pub fn new(queries: Vec<TermLists>, case_sensitive: bool) -> Self {
		let queries = if case_sensitive {
			queries
		} else {
			queries
				.into_iter()
				.map(|query| TermLists {
					inclusions: lowercase(query.inclusions),
					exclusions: lowercase(query.exclusions),
				})
				.collect()
		};
		Self {
			queries,
			case_sensitive,
		}
	}

	pub fn matches(&self, candidate: &str) -> bool {
		if self.queries.is_empty() {
			return true;
		}
		let folded;
		let candidate = if self.case_sensitive {
			candidate
		} else {
			folded = candidate.to_lowercase();
			folded.as_str()
		};
		self.queries.iter().any(|query| {
			query.inclusions.iter().all(|term| candidate.contains(term.as_str()))
				&& !query.exclusions.iter().any(|term| candidate.contains(term.as_str()))
		})
	}
}

fn lowercase(terms: Vec<String>) -> Vec<String> {
	terms.into_iter().map(|term| term.to_lowercase()).collect()
}
