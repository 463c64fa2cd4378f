use crate::cnf::Cnf;
use crate::simplify::simplify;
use crate::syntax::{BinOp, Expr, Symbol};
use crate::SatResult;
use log::trace;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Provenance {
    // forced by unit propagation, or by exhausting the other branch of a
    // guess; never reverts to Guessed
    Derived,
    // an open branching decision, still flippable
    Guessed,
}

#[derive(Clone, PartialEq, Debug)]
struct Assumption {
    variable: String,
    value: bool,
    provenance: Provenance,
}

pub struct Solver {
    formula: Expr,
    clauses: Vec<Expr>,
    // assumption history in the order assumptions were made; insertion order
    // is the backtracking order
    trail: Vec<Assumption>,
}

impl Solver {
    pub fn new(cnf: Cnf) -> Self {
        let formula = cnf.into_ast();
        let clauses = live_clauses(&formula);
        Self {
            formula,
            clauses,
            trail: vec![],
        }
    }

    pub fn solve(&mut self) -> SatResult {
        let mut conflict = self.has_falsified_clause();
        while !self.clauses.is_empty() {
            if conflict {
                if !self.backtrack() {
                    return SatResult::Unsatisfiable;
                }
                // the flipped assumption can falsify a clause straight away,
                // or satisfy every remaining one; start the iteration over
                conflict = self.has_falsified_clause();
                continue;
            }

            let (variable, value, provenance) = match self.find_unit() {
                Some((variable, value)) => (variable, value, Provenance::Derived),
                None => {
                    let (variable, value) = self.first_clause_guess();
                    (variable, value, Provenance::Guessed)
                }
            };
            trace!(
                "{} {} = {}",
                match provenance {
                    Provenance::Derived => "derived",
                    Provenance::Guessed => "guessed",
                },
                variable,
                value
            );

            self.record(variable.clone(), value, provenance);
            self.apply(&variable, value);
            conflict = self.has_falsified_clause();
        }
        SatResult::Satisfiable(self.model())
    }

    // Walks the assumption history backwards, discarding derived assumptions,
    // until the most recent guess; flips that guess and demotes it to
    // derived, then rebuilds the clause list by replaying the surviving
    // assumptions against the original formula. Returns false if there is no
    // guess left to flip, which proves unsatisfiability.
    fn backtrack(&mut self) -> bool {
        if self
            .trail
            .iter()
            .all(|assumption| assumption.provenance == Provenance::Derived)
        {
            return false;
        }

        while let Some(assumption) = self.trail.last_mut() {
            if assumption.provenance == Provenance::Guessed {
                assumption.value = !assumption.value;
                assumption.provenance = Provenance::Derived;
                trace!("flipped {} = {}", assumption.variable, assumption.value);
                break;
            }
            trace!("dropped {}", assumption.variable);
            self.trail.pop();
        }

        let mut clauses = live_clauses(&self.formula);
        for assumption in &self.trail {
            let target = Symbol::Var(assumption.variable.clone());
            let replacement = Symbol::Const(assumption.value);
            clauses = clauses
                .iter()
                .map(|clause| simplify(&clause.substitute(&target, &replacement)))
                .filter(|clause| !clause.is_true())
                .collect();
        }
        self.clauses = clauses;
        true
    }

    fn has_falsified_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_false())
    }

    // The first clause that is not an OR tree is a unit clause and forces
    // its literal.
    fn find_unit(&self) -> Option<(String, bool)> {
        self.clauses.iter().find_map(|clause| match clause {
            Expr::Binary(..) => None,
            _ => literal_of(clause),
        })
    }

    // No unit clause: take the leftmost literal of the first clause.
    fn first_clause_guess(&self) -> (String, bool) {
        let mut node = &self.clauses[0];
        while let Expr::Binary(_, left, _) = node {
            node = left;
        }
        literal_of(node).expect("clause does not start with a literal")
    }

    fn record(&mut self, variable: String, value: bool, provenance: Provenance) {
        match self
            .trail
            .iter_mut()
            .find(|assumption| assumption.variable == variable)
        {
            Some(existing) => {
                existing.value = value;
                existing.provenance = provenance;
            }
            None => self.trail.push(Assumption {
                variable,
                value,
                provenance,
            }),
        }
    }

    fn apply(&mut self, variable: &str, value: bool) {
        let target = Symbol::Var(variable.to_string());
        let replacement = Symbol::Const(value);
        self.clauses = self
            .clauses
            .iter()
            .map(|clause| simplify(&clause.substitute(&target, &replacement)))
            .filter(|clause| !clause.is_true())
            .collect();
    }

    fn model(&self) -> HashMap<String, bool> {
        self.trail
            .iter()
            .map(|assumption| (assumption.variable.clone(), assumption.value))
            .collect()
    }
}

// Flattens the top-level AND spine into clauses. OR trees stay intact: a
// clause is satisfied once substitution and simplification reduce it to 1.
fn extract_clauses(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::Binary(BinOp::And, left, right) => {
            let mut clauses = extract_clauses(left);
            clauses.extend(extract_clauses(right));
            clauses
        }
        _ => vec![expr.clone()],
    }
}

// Clauses that are already satisfied carry no information; a fully
// simplified CNF can even be the single constant 1 or 0.
fn live_clauses(formula: &Expr) -> Vec<Expr> {
    extract_clauses(formula)
        .into_iter()
        .filter(|clause| !clause.is_true())
        .collect()
}

fn literal_of(expr: &Expr) -> Option<(String, bool)> {
    match expr {
        Expr::Lit(Symbol::Var(name)) => Some((name.clone(), true)),
        Expr::Not(inner) => match &**inner {
            Expr::Lit(Symbol::Var(name)) => Some((name.clone(), false)),
            _ => None,
        },
        _ => None,
    }
}
