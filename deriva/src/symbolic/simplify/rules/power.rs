//! Simplification rules for exponentiation.

use crate::parser::ast::Expr;
use crate::parser::op::BinOpKind;
use super::do_binary;

/// `x ^ 1 = x`
pub fn power_one(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })
}

/// `x ^ 0 = 1`
pub fn power_zero(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Exp, |_lhs, rhs| {
        if rhs.is_zero() {
            Some(Expr::one())
        } else {
            None
        }
    })
}

/// `1 ^ x = 1`
pub fn one_power(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Exp, |lhs, _rhs| {
        if lhs.is_one() {
            Some(Expr::one())
        } else {
            None
        }
    })
}

/// `0 ^ x = 0`
pub fn zero_power(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Exp, |lhs, _rhs| {
        if lhs.is_zero() {
            Some(Expr::zero())
        } else {
            None
        }
    })
}

/// Applies all exponentiation rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    power_one(expr)
        .or_else(|| power_zero(expr))
        .or_else(|| one_power(expr))
        .or_else(|| zero_power(expr))
}
