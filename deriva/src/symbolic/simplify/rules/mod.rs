//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply.

pub mod add;
pub mod divide;
pub mod fold;
pub mod multiply;
pub mod negate;
pub mod power;

use crate::parser::ast::Expr;
use crate::parser::op::BinOpKind;

/// If the expression is a binary operation with the given operator, calls the given
/// transformation function with its operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl FnOnce(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Binary(binary) = expr {
        if binary.op == op {
            return f(&binary.lhs, &binary.rhs);
        }
    }

    None
}

/// Matches `x^a` where the base is a variable, returning the variable's name and the exponent.
pub(crate) fn as_power_of_variable(expr: &Expr) -> Option<(&str, &Expr)> {
    if let Expr::Binary(binary) = expr {
        if binary.op == BinOpKind::Exp {
            if let Some(name) = binary.lhs.as_variable() {
                return Some((name, &binary.rhs));
            }
        }
    }

    None
}

/// Matches `c / x` where the numerator is a constant and the denominator is a variable,
/// returning the numerator's value and the variable's name.
pub(crate) fn as_constant_fraction(expr: &Expr) -> Option<(f64, &str)> {
    if let Expr::Binary(binary) = expr {
        if binary.op == BinOpKind::Div {
            if let (Some(c), Some(name)) = (binary.lhs.as_constant(), binary.rhs.as_variable()) {
                return Some((c, name));
            }
        }
    }

    None
}

/// Applies all rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    fold::all(expr)
        .or_else(|| add::all(expr))
        .or_else(|| multiply::all(expr))
        .or_else(|| divide::all(expr))
        .or_else(|| power::all(expr))
        .or_else(|| negate::all(expr))
}
