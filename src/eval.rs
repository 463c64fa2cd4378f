use crate::simplify::simplify;
use crate::syntax::{Expr, Symbol};
use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub enum EvalError {
    // the assignment left part of the formula undetermined
    IncompleteAssignment,
}

/// Substitutes every binding as a constant and simplifies. The result must
/// collapse to a constant; otherwise the caller supplied too few bindings.
pub fn evaluate(expr: &Expr, assignment: &HashMap<String, bool>) -> Result<bool, EvalError> {
    let mut ast = expr.clone();
    for (variable, value) in assignment {
        ast = ast.substitute(&Symbol::Var(variable.clone()), &Symbol::Const(*value));
    }
    match simplify(&ast) {
        Expr::Lit(Symbol::Const(value)) => Ok(value),
        _ => Err(EvalError::IncompleteAssignment),
    }
}
