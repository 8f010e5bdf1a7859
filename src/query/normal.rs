use super::expr::Expr;

/// Negation normal form: negations pushed down until they wrap nothing but
/// literals. Double negations cancel, De Morgan flips the connective.
pub fn to_nnf(expr: Expr) -> Expr {
	match expr {
		Expr::Literal(_) => expr,
		Expr::Not(scope) => match *scope {
			Expr::Literal(_) => Expr::Not(scope),
			Expr::Not(inner) => to_nnf(*inner),
			Expr::And(lhs, rhs) => Expr::or(to_nnf(Expr::Not(lhs)), to_nnf(Expr::Not(rhs))),
			Expr::Or(lhs, rhs) => Expr::and(to_nnf(Expr::Not(lhs)), to_nnf(Expr::Not(rhs))),
		},
		Expr::And(lhs, rhs) => Expr::and(to_nnf(*lhs), to_nnf(*rhs)),
		Expr::Or(lhs, rhs) => Expr::or(to_nnf(*lhs), to_nnf(*rhs)),
	}
}

/// Disjunctive normal form: NNF first, then AND distributed over OR until no
/// conjunction has a disjunction below it.
pub fn to_dnf(expr: Expr) -> Expr {
	nnf_to_dnf(to_nnf(expr))
}

fn nnf_to_dnf(expr: Expr) -> Expr {
	match expr {
		Expr::Literal(_) | Expr::Not(_) => expr,
		Expr::Or(lhs, rhs) => Expr::or(nnf_to_dnf(*lhs), nnf_to_dnf(*rhs)),
		Expr::And(lhs, rhs) => distribute(nnf_to_dnf(*lhs), nnf_to_dnf(*rhs)),
	}
}

// every round strips one Or from under the And, so this bottoms out
fn distribute(lhs: Expr, rhs: Expr) -> Expr {
	match (lhs, rhs) {
		(Expr::Or(a, b), rhs) => Expr::or(distribute(*a, rhs.clone()), distribute(*b, rhs)),
		(lhs, Expr::Or(a, b)) => Expr::or(distribute(lhs.clone(), *a), distribute(lhs, *b)),
		(lhs, rhs) => Expr::and(lhs, rhs),
	}
}

pub fn is_nnf(expr: &Expr) -> bool {
	match expr {
		Expr::Literal(_) => true,
		Expr::Not(scope) => matches!(**scope, Expr::Literal(_)),
		Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => is_nnf(lhs) && is_nnf(rhs),
	}
}

pub fn is_dnf(expr: &Expr) -> bool {
	is_nnf(expr) && no_and_above_or(expr)
}

fn no_and_above_or(expr: &Expr) -> bool {
	match expr {
		Expr::Literal(_) => true,
		Expr::Not(scope) => no_and_above_or(scope),
		Expr::Or(lhs, rhs) => no_and_above_or(lhs) && no_and_above_or(rhs),
		Expr::And(lhs, rhs) => or_free(lhs) && or_free(rhs),
	}
}

fn or_free(expr: &Expr) -> bool {
	match expr {
		Expr::Literal(_) => true,
		Expr::Not(scope) => or_free(scope),
		Expr::Or(_, _) => false,
		Expr::And(lhs, rhs) => or_free(lhs) && or_free(rhs),
	}
}
