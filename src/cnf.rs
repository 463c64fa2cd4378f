use crate::simplify::simplify;
use crate::syntax::{BinOp, Expr};

/// A formula in conjunctive normal form: an AND of clauses, each clause an OR
/// of literals, with negation only ever applied to a literal. Built by
/// [`to_cnf`]; the solver only accepts this type.
#[derive(Clone, PartialEq, Debug)]
pub struct Cnf {
    ast: Expr,
}

impl Cnf {
    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    pub(crate) fn into_ast(self) -> Expr {
        self.ast
    }
}

pub fn to_cnf(expr: &Expr) -> Cnf {
    let expanded = expand_connectives(expr);
    let negated_inward = push_negations(&expanded);
    let distributed = distribute_or_over_and(&negated_inward);
    // distribution can leave behind trivial tautologies like (a | !a | b)
    Cnf {
        ast: simplify(&distributed),
    }
}

// a ^ b    ->  (a & !b) | (!a & b)
// a => b   ->  !a | b
// a <=> b  ->  (a & b) | (!a & !b)
fn expand_connectives(expr: &Expr) -> Expr {
    match expr {
        Expr::Binary(op, left, right) => {
            let left = expand_connectives(left);
            let right = expand_connectives(right);
            match op {
                BinOp::And | BinOp::Or => Expr::binary(*op, left, right),
                BinOp::Xor => Expr::or(
                    Expr::and(left.clone(), Expr::not(right.clone())),
                    Expr::and(Expr::not(left), right),
                ),
                BinOp::Implies => Expr::or(Expr::not(left), right),
                BinOp::Iff => Expr::or(
                    Expr::and(left.clone(), right.clone()),
                    Expr::and(Expr::not(left), Expr::not(right)),
                ),
            }
        }
        Expr::Not(inner) => Expr::not(expand_connectives(inner)),
        Expr::Lit(_) => expr.clone(),
    }
}

// Assumes expand_connectives ran: only AND, OR and NOT remain.
fn push_negations(expr: &Expr) -> Expr {
    match expr {
        Expr::Not(inner) => negate_inward(inner),
        Expr::Binary(op, left, right) => {
            Expr::binary(*op, push_negations(left), push_negations(right))
        }
        Expr::Lit(_) => expr.clone(),
    }
}

// push_negations of a negated subtree: De Morgan on AND/OR, double negation
// drops, a negated literal is already minimal.
fn negate_inward(expr: &Expr) -> Expr {
    match expr {
        Expr::Not(inner) => push_negations(inner),
        Expr::Binary(BinOp::And, left, right) => {
            Expr::or(negate_inward(left), negate_inward(right))
        }
        Expr::Binary(BinOp::Or, left, right) => {
            Expr::and(negate_inward(left), negate_inward(right))
        }
        _ => Expr::not(expr.clone()),
    }
}

// Assumes push_negations ran: NOT only wraps literals.
fn distribute_or_over_and(expr: &Expr) -> Expr {
    match expr {
        Expr::Binary(BinOp::And, left, right) => Expr::and(
            distribute_or_over_and(left),
            distribute_or_over_and(right),
        ),
        Expr::Binary(BinOp::Or, left, right) => {
            // Distribute both children before inspecting them: a nested OR
            // can surface an AND that still has to be lifted.
            let left = distribute_or_over_and(left);
            let right = distribute_or_over_and(right);
            match (left, right) {
                // (a & b) | r  ->  (a | r) & (b | r)
                (Expr::Binary(BinOp::And, a, b), r) => Expr::and(
                    distribute_or_over_and(&Expr::or(*a, r.clone())),
                    distribute_or_over_and(&Expr::or(*b, r)),
                ),
                // l | (a & b)  ->  (l | a) & (l | b)
                (l, Expr::Binary(BinOp::And, a, b)) => Expr::and(
                    distribute_or_over_and(&Expr::or(l.clone(), *a)),
                    distribute_or_over_and(&Expr::or(l, *b)),
                ),
                (l, r) => Expr::or(l, r),
            }
        }
        _ => expr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use crate::syntax::arb_expr;
    use crate::syntax::parse::parse_formula;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn cnf_of(source: &str) -> Cnf {
        to_cnf(&parse_formula(source).expect("failed to parse"))
    }

    fn is_literal(expr: &Expr) -> bool {
        match expr {
            Expr::Lit(_) => true,
            Expr::Not(inner) => match &**inner {
                Expr::Lit(_) => true,
                _ => false,
            },
            _ => false,
        }
    }

    fn is_clause(expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinOp::Or, left, right) => is_clause(left) && is_clause(right),
            _ => is_literal(expr),
        }
    }

    fn is_cnf(expr: &Expr) -> bool {
        match expr {
            Expr::Binary(BinOp::And, left, right) => is_cnf(left) && is_cnf(right),
            _ => is_clause(expr),
        }
    }

    #[test]
    fn implication_becomes_clause() {
        let cnf = cnf_of("a => b");
        let expected = parse_formula("!a | b").expect("failed to parse");
        assert!(cnf.ast().equivalent(&expected));
    }

    #[test]
    fn xor_becomes_two_clauses() {
        let cnf = cnf_of("a ^ b");
        assert!(is_cnf(cnf.ast()));
        let expected = parse_formula("(a | b) & (!a | !b)").expect("failed to parse");
        assert!(semantically_equal(cnf.ast(), &expected));
    }

    #[test]
    fn nested_or_exposes_an_and() {
        // ((a & b) | c) | d has the AND two ORs deep; distribution has to
        // recurse through the freshly built clauses to lift it out
        let cnf = cnf_of("((a & b) | c) | d");
        assert!(is_cnf(cnf.ast()));
        let expected = parse_formula("(a | c | d) & (b | c | d)").expect("failed to parse");
        assert!(semantically_equal(cnf.ast(), &expected));
    }

    #[test]
    fn negated_compound_is_pushed_inward() {
        let cnf = cnf_of("!(a & (b | c))");
        assert!(is_cnf(cnf.ast()));
        let expected = parse_formula("!a | (!b & !c)").expect("failed to parse");
        assert!(semantically_equal(cnf.ast(), &expected));
    }

    #[test]
    fn contradictions_collapse_to_false() {
        assert!(cnf_of("a & !a").ast().is_false());
        assert!(cnf_of("a ^ a").ast().is_false());
    }

    #[test]
    fn tautologies_collapse_to_true() {
        assert!(cnf_of("a | !a").ast().is_true());
        assert!(cnf_of("a => a").ast().is_true());
    }

    fn semantically_equal(a: &Expr, b: &Expr) -> bool {
        let mut variables = a.variables();
        for v in b.variables() {
            if !variables.contains(&v) {
                variables.push(v);
            }
        }
        for state in 0..(1u32 << variables.len()) {
            let assignment: HashMap<String, bool> = variables
                .iter()
                .enumerate()
                .map(|(index, variable)| (variable.clone(), state & (1 << index) != 0))
                .collect();
            let value_a = evaluate(a, &assignment).expect("total assignment must evaluate");
            let value_b = evaluate(b, &assignment).expect("total assignment must evaluate");
            if value_a != value_b {
                return false;
            }
        }
        true
    }

    proptest! {
        #[test]
        fn proptest_cnf_shape(expr in arb_expr()) {
            let cnf = to_cnf(&expr);
            prop_assert!(is_cnf(cnf.ast()), "not in CNF: {}", cnf.ast());
        }

        #[test]
        fn proptest_cnf_preserves_meaning(expr in arb_expr()) {
            let cnf = to_cnf(&expr);
            prop_assert!(semantically_equal(&expr, cnf.ast()));
        }
    }
}
