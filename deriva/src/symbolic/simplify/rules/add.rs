//! Simplification rules for addition and subtraction.

use crate::parser::ast::Expr;
use crate::parser::op::BinOpKind;
use super::do_binary;

/// `0 + x = x`
/// `x + 0 = x`
pub fn add_zero(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })
}

/// `x - 0 = x`
pub fn sub_zero(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })
}

/// Applies all addition and subtraction rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    add_zero(expr).or_else(|| sub_zero(expr))
}
