use serde::Serialize;

use super::expr::Expr;

/// One disjunct of a compiled query: a candidate satisfies it when every
/// inclusion appears and no exclusion does. A full compiled query is a list
/// of these, satisfied when any one of them is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TermLists {
	pub inclusions: Vec<String>,
	pub exclusions: Vec<String>,
}

/// Splits a DNF tree into its disjuncts, left to right. The input must be in
/// DNF; `compile` guarantees that.
pub fn term_lists(expr: &Expr) -> Vec<TermLists> {
	match expr {
		Expr::Or(lhs, rhs) => {
			let mut lists = term_lists(lhs);
			lists.extend(term_lists(rhs));
			lists
		}
		_ => vec![conjunct_terms(expr)],
	}
}

fn conjunct_terms(expr: &Expr) -> TermLists {
	let mut lists = TermLists::default();
	collect(expr, &mut lists);
	lists
}

fn collect(expr: &Expr, lists: &mut TermLists) {
	match expr {
		Expr::Literal(text) => lists.inclusions.push(text.clone()),
		Expr::Not(scope) => match &**scope {
			Expr::Literal(text) => lists.exclusions.push(text.clone()),
			_ => unreachable!("negations wrap literals once in normal form"),
		},
		Expr::And(lhs, rhs) => {
			collect(lhs, lists);
			collect(rhs, lists);
		}
		Expr::Or(_, _) => unreachable!("disjuncts are or-free in normal form"),
	}
}
