use std::fmt;

/// A parsed query. Children are owned outright; transformations build new
/// trees instead of mutating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
	Literal(String),
	Not(Box<Expr>),
	And(Box<Expr>, Box<Expr>),
	Or(Box<Expr>, Box<Expr>),
}

impl Expr {
	pub fn literal(text: impl Into<String>) -> Self {
		Expr::Literal(text.into())
	}

	pub fn not(scope: Expr) -> Self {
		Expr::Not(Box::new(scope))
	}

	pub fn and(lhs: Expr, rhs: Expr) -> Self {
		Expr::And(Box::new(lhs), Box::new(rhs))
	}

	pub fn or(lhs: Expr, rhs: Expr) -> Self {
		Expr::Or(Box::new(lhs), Box::new(rhs))
	}

	/// Truth value of the query under a literal assignment.
	pub fn evaluate(&self, truth: &impl Fn(&str) -> bool) -> bool {
		match self {
			Expr::Literal(text) => truth(text),
			Expr::Not(scope) => !scope.evaluate(truth),
			Expr::And(lhs, rhs) => lhs.evaluate(truth) && rhs.evaluate(truth),
			Expr::Or(lhs, rhs) => lhs.evaluate(truth) || rhs.evaluate(truth),
		}
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			// quoting anything that is not a plain alphabetic run keeps
			// the printed form tokenizable as a single identifier
			Expr::Literal(text) => {
				if !text.is_empty() && text.chars().all(char::is_alphabetic) {
					write!(f, "{text}")
				} else {
					write!(f, "\"{text}\"")
				}
			}
			Expr::Not(scope) => write!(f, "!{scope}"),
			Expr::And(lhs, rhs) => write!(f, "({lhs} & {rhs})"),
			Expr::Or(lhs, rhs) => write!(f, "({lhs} | {rhs})"),
		}
	}
}
