use crate::eval::evaluate;
use crate::syntax::Expr;
use crate::SatResult;
use std::collections::HashMap;

// Exhaustive search over every assignment, used as the oracle for the
// solver's property tests.
pub(crate) fn solve_brute_force(expr: &Expr) -> SatResult {
    let variables = expr.variables();
    assert!(variables.len() <= 15); // just for safety

    for state in 0..(1u32 << variables.len()) {
        let assignment: HashMap<String, bool> = variables
            .iter()
            .enumerate()
            .map(|(index, variable)| (variable.clone(), state & (1 << index) != 0))
            .collect();
        if evaluate(expr, &assignment).expect("total assignment must evaluate") {
            return SatResult::Satisfiable(assignment);
        }
    }
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse::parse_formula;

    fn brute_force(source: &str) -> SatResult {
        solve_brute_force(&parse_formula(source).expect("failed to parse"))
    }

    #[test]
    fn finds_a_model() {
        match brute_force("(a | b) & !a") {
            SatResult::Satisfiable(model) => {
                assert_eq!(model.get("a"), Some(&false));
                assert_eq!(model.get("b"), Some(&true));
            }
            SatResult::Unsatisfiable => panic!("expected a model"),
        }
    }

    #[test]
    fn detects_unsatisfiability() {
        assert_eq!(brute_force("a & !a"), SatResult::Unsatisfiable);
        assert_eq!(brute_force("(a | b) & !a & !b"), SatResult::Unsatisfiable);
    }

    #[test]
    fn handles_constant_formulas() {
        assert_eq!(brute_force("0"), SatResult::Unsatisfiable);
        match brute_force("1") {
            SatResult::Satisfiable(model) => assert!(model.is_empty()),
            SatResult::Unsatisfiable => panic!("expected a model"),
        }
    }
}
