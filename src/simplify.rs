use crate::syntax::{BinOp, Expr, Symbol};

// Rewrites an expression to a smaller equivalent using a fixed identity
// table:
//
//   !!a        <=>  a         !0  <=> 1        !1  <=> 0
//
//   (a & a)    <=>  a         (a & !a)   <=>  0
//   (a | a)    <=>  a         (a | !a)   <=>  1
//   (a ^ a)    <=>  0         (a ^ !a)   <=>  1
//   (a => a)   <=>  1         (a <=> !a) <=>  0
//   (a <=> a)  <=>  1         (a => !a)  <=> !a    (!a => a) <=> a
//
//   (0 & a)    <=>  0         (1 & a)    <=>  a
//   (0 | a)    <=>  a         (1 | a)    <=>  1
//   (0 ^ a)    <=>  a         (1 ^ a)    <=> !a
//   (0 => a)   <=>  1         (1 => a)   <=>  a
//   (0 <=> a)  <=> !a         (1 <=> a)  <=>  a
//
//   (a => 0)   <=> !a         (a => 1)   <=>  1
//
// The rules are tried in order: equivalent operands, complementary operands,
// then constant folding. Idempotent: simplifying a second time is a no-op.
pub fn simplify(expr: &Expr) -> Expr {
    match expr {
        Expr::Lit(_) => expr.clone(),
        Expr::Not(inner) => {
            let inner = simplify(inner);
            match inner {
                Expr::Lit(Symbol::Const(value)) => Expr::constant(!value),
                Expr::Not(x) => *x,
                _ => Expr::not(inner),
            }
        }
        Expr::Binary(op, left, right) => simplify_binary(*op, simplify(left), simplify(right)),
    }
}

fn simplify_binary(op: BinOp, mut left: Expr, mut right: Expr) -> Expr {
    // a ∘ a
    if left.equivalent(&right) {
        return match op {
            BinOp::And | BinOp::Or => left,
            BinOp::Xor => Expr::constant(false),
            BinOp::Implies | BinOp::Iff => Expr::constant(true),
        };
    }
    // a ∘ !a
    if complementary(&left, &right) {
        return match op {
            BinOp::And | BinOp::Iff => Expr::constant(false),
            BinOp::Or | BinOp::Xor => Expr::constant(true),
            BinOp::Implies => right,
        };
    }
    // Move a right-hand constant to the left so the constant rules below only
    // have to look one way. Not sound for =>, which keeps its operand order.
    if right.as_const().is_some() && op != BinOp::Implies {
        std::mem::swap(&mut left, &mut right);
    }
    if left.is_false() {
        return match op {
            BinOp::And => Expr::constant(false),
            BinOp::Or | BinOp::Xor => right,
            BinOp::Implies => Expr::constant(true),
            BinOp::Iff => simplify(&Expr::not(right)),
        };
    }
    if left.is_true() {
        return match op {
            BinOp::Or => Expr::constant(true),
            BinOp::Xor => simplify(&Expr::not(right)),
            BinOp::And | BinOp::Implies | BinOp::Iff => right,
        };
    }
    // a => 0 and a => 1
    if right.is_false() {
        return simplify(&Expr::not(left));
    }
    if right.is_true() {
        return Expr::constant(true);
    }
    Expr::binary(op, left, right)
}

fn complementary(left: &Expr, right: &Expr) -> bool {
    if let Expr::Not(inner) = right {
        if left.equivalent(inner) {
            return true;
        }
    }
    match left {
        Expr::Not(inner) => inner.equivalent(right),
        _ => false,
    }
}
