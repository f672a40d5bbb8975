//! Constant folding: a node whose operands are all constants is replaced by its value.

use crate::numerical::{ctxt::Ctxt, eval::Eval};
use crate::parser::ast::{Constant, Expr};

/// Folds a node whose operands are all constants by evaluating it in the empty context.
///
/// Binary and unary arithmetic cannot fail, and IEEE-754 semantics apply — `1/0` folds to
/// infinity, `ln(-1)` to NaN. A function call that fails to evaluate (an unknown function, an
/// arity mismatch) abandons the fold instead: the failure is discarded here and never
/// propagates, and the call is kept with its simplified arguments.
pub fn fold_constants(expr: &Expr) -> Option<Expr> {
    let ready = match expr {
        Expr::Binary(binary) => {
            binary.lhs.as_constant().is_some() && binary.rhs.as_constant().is_some()
        },
        Expr::Unary(unary) => unary.operand.as_constant().is_some(),
        Expr::Call(call) => call.args.iter().all(|arg| arg.as_constant().is_some()),
        _ => false,
    };

    if !ready {
        return None;
    }

    expr.eval(&Ctxt::new())
        .ok()
        .map(|value| Expr::Constant(Constant::new(value)))
}

/// Applies all folding rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    fold_constants(expr)
}
