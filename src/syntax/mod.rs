pub mod parse;

use std::fmt::{self, Display, Formatter};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Symbol {
    Var(String),
    Const(bool),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Symbol::Var(name) => f.write_str(name),
            Symbol::Const(true) => f.write_str("1"),
            Symbol::Const(false) => f.write_str("0"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl BinOp {
    // Every binary operator except => may have its operands swapped without
    // changing the formula's meaning.
    pub fn is_commutative(self) -> bool {
        match self {
            BinOp::Implies => false,
            _ => true,
        }
    }

    fn lexeme(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Xor => "^",
            BinOp::Implies => "=>",
            BinOp::Iff => "<=>",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            BinOp::And => "∧",
            BinOp::Or => "∨",
            BinOp::Xor => "⊕",
            BinOp::Implies => "⇒",
            BinOp::Iff => "⇔",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Lit(Symbol),
    Not(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Lit(Symbol::Var(name.into()))
    }

    pub fn constant(value: bool) -> Self {
        Expr::Lit(Symbol::Const(value))
    }

    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::binary(BinOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::binary(BinOp::Or, left, right)
    }

    pub fn as_const(&self) -> Option<bool> {
        match self {
            Expr::Lit(Symbol::Const(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        self.as_const() == Some(true)
    }

    pub fn is_false(&self) -> bool {
        self.as_const() == Some(false)
    }

    /// Syntactic equality up to single-level operand commutativity. This is
    /// not a tautology check: `a | !a` and `1` are not equivalent here.
    pub fn equivalent(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Lit(a), Expr::Lit(b)) => a == b,
            (Expr::Not(a), Expr::Not(b)) => a.equivalent(b),
            (Expr::Binary(op_a, left_a, right_a), Expr::Binary(op_b, left_b, right_b)) => {
                op_a == op_b
                    && ((left_a.equivalent(left_b) && right_a.equivalent(right_b))
                        || (op_a.is_commutative()
                            && left_a.equivalent(right_b)
                            && right_a.equivalent(left_b)))
            }
            _ => false,
        }
    }

    /// Replaces every literal equal to `target` with `replacement`, which may
    /// be another variable or a constant.
    pub fn substitute(&self, target: &Symbol, replacement: &Symbol) -> Expr {
        match self {
            Expr::Lit(symbol) => {
                if symbol == target {
                    Expr::Lit(replacement.clone())
                } else {
                    self.clone()
                }
            }
            Expr::Not(inner) => Expr::not(inner.substitute(target, replacement)),
            Expr::Binary(op, left, right) => Expr::binary(
                *op,
                left.substitute(target, replacement),
                right.substitute(target, replacement),
            ),
        }
    }

    /// Variable names in first-seen pre-order. Truth table columns depend on
    /// this order.
    pub fn variables(&self) -> Vec<String> {
        let mut variables = Vec::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut Vec<String>) {
        match self {
            Expr::Lit(Symbol::Var(name)) => {
                if !variables.iter().any(|v| v == name) {
                    variables.push(name.clone());
                }
            }
            Expr::Lit(Symbol::Const(_)) => {}
            Expr::Not(inner) => inner.collect_variables(variables),
            Expr::Binary(_, left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    /// Compound sub-expressions in pre-order, the expression itself first and
    /// right subtrees before left ones. Literals are excluded.
    pub fn sub_expressions(&self) -> Vec<&Expr> {
        match self {
            Expr::Lit(_) => vec![],
            Expr::Not(inner) => {
                let mut subs = vec![self];
                subs.extend(inner.sub_expressions());
                subs
            }
            Expr::Binary(_, left, right) => {
                let mut subs = vec![self];
                subs.extend(right.sub_expressions());
                subs.extend(left.sub_expressions());
                subs
            }
        }
    }
}

// The plain format is the parseable ASCII form; the alternate form `{:#}`
// uses the traditional operator glyphs.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Expr::Lit(symbol) => write!(f, "{}", symbol),
            Expr::Not(inner) => {
                if f.alternate() {
                    write!(f, "¬{:#}", inner)
                } else {
                    write!(f, "!{}", inner)
                }
            }
            Expr::Binary(op, left, right) => {
                if f.alternate() {
                    write!(f, "({:#} {} {:#})", left, op.glyph(), right)
                } else {
                    write!(f, "({}{}{})", left, op.lexeme(), right)
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn arb_expr() -> impl proptest::strategy::Strategy<Value = Expr> {
    use proptest::prelude::*;

    let leaf = prop_oneof![
        4 => prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(|name| Expr::variable(name)),
        1 => any::<bool>().prop_map(Expr::constant),
    ];
    leaf.prop_recursive(3, 24, 2, |inner| {
        let op = prop::sample::select(vec![
            BinOp::And,
            BinOp::Or,
            BinOp::Xor,
            BinOp::Implies,
            BinOp::Iff,
        ]);
        prop_oneof![
            1 => inner.clone().prop_map(Expr::not),
            3 => (op, inner.clone(), inner).prop_map(|(op, left, right)| Expr::binary(op, left, right)),
        ]
    })
}
