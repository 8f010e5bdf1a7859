mod data;
mod expr;
mod lexer;
mod normal;
mod parser;
mod terms;

pub use data::{MalformedQuery, Result, Token, TokenKind};
pub use expr::Expr;
pub use lexer::tokenize;
pub use normal::{is_dnf, is_nnf, to_dnf, to_nnf};
pub use parser::parse;
pub use terms::{term_lists, TermLists};

/// Queries longer than this are rejected outright. Parse depth grows with
/// input length, and nothing a person types into a search box comes close.
pub const MAX_QUERY_LEN: usize = 4096;

/// Whether the query parses under the grammar. An empty (or all-whitespace)
/// query is well-formed by convention: it compiles to zero disjuncts and
/// matches everything.
pub fn well_formed(query: &str) -> bool {
	query.trim().is_empty() || checked_parse(query).is_ok()
}

/// Tokenizes, parses, normalizes to DNF and flattens into one
/// inclusion/exclusion pair per disjunct.
pub fn compile(query: &str) -> Result<Vec<TermLists>> {
	if query.trim().is_empty() {
		return Ok(Vec::new());
	}
	let expr = checked_parse(query)?;
	let queries = terms::term_lists(&normal::to_dnf(expr));
	log::debug!("compiled {query:?} into {} disjunct(s)", queries.len());
	Ok(queries)
}

fn checked_parse(query: &str) -> Result<Expr> {
	if query.len() > MAX_QUERY_LEN {
		return Err(MalformedQuery);
	}
	parser::parse(query)
}

/// The convenience layer in front of the grammar: users may type `NOT`,
/// `AND`, `OR` instead of `!`, `&`, `|`. Plain textual substitution, exactly
/// as blunt as it sounds — it rewrites inside quoted phrases too.
pub fn substitute_keywords(query: &str) -> String {
	query
		.trim()
		.replace("NOT", "!")
		.replace("AND", "&")
		.replace("OR", "|")
}
