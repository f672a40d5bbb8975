//! Simplification rules for unary negation.
//!
//! A negation of a constant is handled by [constant folding](super::fold); the rule here
//! collapses double negation.

use crate::parser::ast::Expr;
use crate::parser::op::UnaryOpKind;

/// `-(-x) = x`
pub fn double_negation(expr: &Expr) -> Option<Expr> {
    if let Expr::Unary(outer) = expr {
        if outer.op == UnaryOpKind::Neg {
            if let Expr::Unary(inner) = &*outer.operand {
                if inner.op == UnaryOpKind::Neg {
                    return Some((*inner.operand).clone());
                }
            }
        }
    }

    None
}

/// Applies all negation rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    double_negation(expr)
}
