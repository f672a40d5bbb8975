//! Simplification rules for multiplication, including the power patterns that combine factors
//! sharing a single variable base.

use crate::parser::ast::Expr;
use crate::parser::op::BinOpKind;
use crate::symbolic::simplify::Simplify;
use super::{as_constant_fraction, as_power_of_variable, do_binary};

/// `0 * x = x * 0 = 0`
pub fn multiply_zero(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_zero() || rhs.is_zero() {
            Some(Expr::zero())
        } else {
            None
        }
    })
}

/// `1 * x = x`
/// `x * 1 = x`
pub fn multiply_one(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })
}

/// Power patterns over a single shared variable base, tried in both operand orders:
///
/// `x * (1/x) = 1`
/// `k * (1/x) = k/x`
/// `x^a * x^b = x^(a+b)`
/// `x^a * (1/x) = x^(a-1)`
/// `x^a * (c/x) = c * x^(a-1)`
pub fn combine_factors(expr: &Expr) -> Option<Expr> {
    do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        try_combine(lhs, rhs).or_else(|| try_combine(rhs, lhs))
    })
}

fn try_combine(first: &Expr, second: &Expr) -> Option<Expr> {
    if let Some((c, den)) = as_constant_fraction(second) {
        // x * (1/x) = 1
        if first.as_variable() == Some(den) && c == 1.0 {
            return Some(Expr::one());
        }

        // k * (1/x) = k/x
        if let Some(k) = first.as_constant() {
            if c == 1.0 {
                return Some(Expr::from(k) / Expr::var(den));
            }
        }

        // x^a * (1/x) = x^(a-1)
        // x^a * (c/x) = c * x^(a-1)
        if let Some((base, a)) = as_power_of_variable(first) {
            if base == den {
                let power = Expr::var(base).pow(a.clone() - Expr::one()).simplify();
                return Some(if c == 1.0 {
                    power
                } else {
                    (Expr::from(c) * power).simplify()
                });
            }
        }
    }

    // x^a * x^b = x^(a+b) (same base only)
    if let (Some((base, a)), Some((other, b))) =
        (as_power_of_variable(first), as_power_of_variable(second))
    {
        if base == other {
            return Some(Expr::var(base).pow(a.clone() + b.clone()).simplify());
        }
    }

    None
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    multiply_zero(expr)
        .or_else(|| multiply_one(expr))
        .or_else(|| combine_factors(expr))
}
