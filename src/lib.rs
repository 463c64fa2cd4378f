mod cnf;
mod eval;
mod simplify;
mod solver;
mod syntax;
mod truth_table;

#[cfg(test)]
mod brute_force;

use std::collections::HashMap;

#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(HashMap<String, bool>),
    Unsatisfiable,
}

pub use cnf::{to_cnf, Cnf};
pub use eval::{evaluate, EvalError};
pub use simplify::simplify;
pub use solver::Solver;
pub use syntax::parse::{parse, parse_formula, tokenize, ParseError, Token};
pub use syntax::{BinOp, Expr, Symbol};
pub use truth_table::{truth_table, TableFormat, TruthTableOptions};
