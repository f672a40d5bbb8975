//! Simplification rules for division, including cancellation against a single variable base.

use crate::parser::ast::Expr;
use crate::parser::op::BinOpKind;
use crate::symbolic::simplify::Simplify;
use super::{as_power_of_variable, do_binary};

/// `0 / x = 0`
pub fn divide_zero(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Div, |lhs, _rhs| {
        if lhs.is_zero() {
            Some(Expr::zero())
        } else {
            None
        }
    })
}

/// `x / 1 = x`
pub fn divide_one(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })
}

/// Cancellation against a variable denominator:
///
/// `x / x = 1`
/// `(k * x) / x = k`
/// `x^a / x = x^(a-1)`
pub fn cancel_common_base(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        let den = rhs.as_variable()?;

        // x / x = 1
        if lhs.as_variable() == Some(den) {
            return Some(Expr::one());
        }

        // (k * x) / x = k (either operand order of the product)
        if let Expr::Binary(product) = lhs {
            if product.op == BinOpKind::Mul {
                if product.rhs.as_variable() == Some(den) && product.lhs.as_constant().is_some() {
                    return Some((*product.lhs).clone());
                }
                if product.lhs.as_variable() == Some(den) && product.rhs.as_constant().is_some() {
                    return Some((*product.rhs).clone());
                }
            }
        }

        // x^a / x = x^(a-1)
        if let Some((base, a)) = as_power_of_variable(lhs) {
            if base == den {
                return Some(Expr::var(base).pow(a.clone() - Expr::one()).simplify());
            }
        }

        None
    })
}

/// Applies all division rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    divide_zero(expr)
        .or_else(|| divide_one(expr))
        .or_else(|| cancel_common_base(expr))
}
