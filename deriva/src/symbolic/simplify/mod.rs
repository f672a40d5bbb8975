//! Best-effort algebraic simplification.
//!
//! Simplification recurses bottom-up: a node's children are simplified first, then node-local
//! rewrite rules apply. Each rule is a function that takes the expression and returns
//! `Some(expr)` with a simpler expression if the rule applies, or `None` if it does not; the
//! rule set lives in [`rules`]. Rules that build composite results re-simplify what they build.
//! Every rewrite either shrinks the tree or produces a form no rule matches again, so the rule
//! loop terminates.
//!
//! Simplification is total: it never fails. Constant folding of a function call that cannot be
//! evaluated (an unknown function, an arity mismatch) is simply abandoned, leaving the call with
//! its simplified arguments. A node no rule matches, whose children are unchanged, is returned
//! as-is, which makes the pass idempotent. Commutative operand order is never canonicalized;
//! order-insensitive comparison is the job of [`Expr`]'s `PartialEq`.

pub mod rules;

use crate::parser::ast::{Binary, Expr, Unary};

/// Simplifies an expression node.
pub trait Simplify {
    /// Returns a simplified expression equivalent to this node. Never fails.
    fn simplify(&self) -> Expr;
}

impl Simplify for Expr {
    fn simplify(&self) -> Expr {
        // children first
        let simplified = match self {
            Expr::Constant(_) | Expr::Variable(_) => return self.clone(),
            Expr::Binary(binary) => {
                let lhs = binary.lhs.simplify();
                let rhs = binary.rhs.simplify();
                if lhs == *binary.lhs && rhs == *binary.rhs {
                    self.clone()
                } else {
                    Expr::Binary(Binary::new(binary.op, lhs, rhs))
                }
            },
            Expr::Unary(unary) => {
                let operand = unary.operand.simplify();
                if operand == *unary.operand {
                    self.clone()
                } else {
                    Expr::Unary(Unary::new(unary.op, operand))
                }
            },
            Expr::Call(call) => {
                let args = call.args.iter().map(Simplify::simplify).collect::<Vec<_>>();
                if args == call.args {
                    self.clone()
                } else {
                    Expr::call(call.name.clone(), args)
                }
            },
        };

        // then node-local rules, until none fires
        let mut expr = simplified;
        while let Some(rewritten) = rules::all(&expr) {
            expr = rewritten;
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use crate::parser::parse;
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn identity_rules() {
        assert_eq!((Expr::zero() + Expr::var("x")).simplify(), Expr::var("x"));
        assert_eq!((Expr::var("x") + Expr::zero()).simplify(), Expr::var("x"));
        assert_eq!((Expr::var("x") - Expr::zero()).simplify(), Expr::var("x"));
        assert_eq!((Expr::var("x") * Expr::one()).simplify(), Expr::var("x"));
        assert_eq!((Expr::one() * Expr::var("x")).simplify(), Expr::var("x"));
        assert_eq!((Expr::zero() * Expr::var("x")).simplify(), Expr::zero());
        assert_eq!((Expr::var("x") * Expr::zero()).simplify(), Expr::zero());
        assert_eq!((Expr::zero() / Expr::var("x")).simplify(), Expr::zero());
        assert_eq!((Expr::var("x") / Expr::one()).simplify(), Expr::var("x"));
        assert_eq!(Expr::var("x").pow(Expr::one()).simplify(), Expr::var("x"));
        assert_eq!(Expr::var("x").pow(Expr::zero()).simplify(), Expr::one());
        assert_eq!(Expr::one().pow(Expr::var("x")).simplify(), Expr::one());
        assert_eq!(Expr::zero().pow(Expr::var("x")).simplify(), Expr::zero());
    }

    #[test]
    fn constant_folding() {
        assert_eq!((Expr::from(2.0) + Expr::from(3.0)).simplify(), Expr::from(5.0));
        assert_eq!((Expr::from(10.0) / Expr::from(4.0)).simplify(), Expr::from(2.5));
        assert_eq!((-Expr::from(1.5)).simplify(), Expr::from(-1.5));

        // IEEE-754 semantics: folding does not treat non-finite results as failures
        assert_eq!((Expr::one() / Expr::zero()).simplify(), Expr::from(f64::INFINITY));
    }

    #[test]
    fn call_folding() {
        assert_eq!(parse("abs(0 - 3)").unwrap(), Expr::from(3.0));
        assert_eq!(parse("max(2, 7)").unwrap(), Expr::from(7.0));

        let nan = Expr::call("ln", vec![Expr::from(-1.0)]).simplify();
        assert!(nan.as_constant().unwrap().is_nan());
    }

    #[test]
    fn failed_call_folding_is_abandoned() {
        // unknown function: the fold is abandoned, the simplified arguments are kept
        let expr = Expr::call("foo", vec![Expr::from(1.0) + Expr::from(2.0)]);
        assert_eq!(expr.simplify(), Expr::call("foo", vec![Expr::from(3.0)]));

        // arity mismatch: likewise
        let expr = Expr::call("sin", vec![Expr::from(1.0), Expr::from(2.0)]);
        assert_eq!(expr.simplify(), expr);
    }

    #[test]
    fn double_negation() {
        let expr = -(-Expr::var("x"));
        assert_eq!(expr.simplify(), Expr::var("x"));

        let expr = -(-(-Expr::var("x")));
        assert_eq!(expr.simplify(), -Expr::var("x"));
    }

    #[test]
    fn power_patterns() {
        // x * (1/x) = 1
        let expr = Expr::var("x") * (Expr::one() / Expr::var("x"));
        assert_eq!(expr.simplify(), Expr::one());

        // k * (1/x) = k/x
        let expr = Expr::from(3.0) * (Expr::one() / Expr::var("x"));
        assert_eq!(expr.simplify(), Expr::from(3.0) / Expr::var("x"));

        // x^a * x^b = x^(a+b)
        let expr = Expr::var("x").pow(Expr::from(3.0)) * Expr::var("x").pow(Expr::from(2.0));
        assert_eq!(expr.simplify(), Expr::var("x").pow(Expr::from(5.0)));

        // x^a * (1/x) = x^(a-1)
        let expr = Expr::var("x").pow(Expr::from(3.0)) * (Expr::one() / Expr::var("x"));
        assert_eq!(expr.simplify(), Expr::var("x").pow(Expr::from(2.0)));

        // x^a * (c/x) = c * x^(a-1)
        let expr = Expr::var("x").pow(Expr::from(3.0)) * (Expr::from(5.0) / Expr::var("x"));
        assert_eq!(
            expr.simplify(),
            Expr::from(5.0) * Expr::var("x").pow(Expr::from(2.0)),
        );

        // (k * x) / x = k
        let expr = (Expr::from(4.0) * Expr::var("x")) / Expr::var("x");
        assert_eq!(expr.simplify(), Expr::from(4.0));

        // x^a / x = x^(a-1)
        let expr = Expr::var("x").pow(Expr::from(3.0)) / Expr::var("x");
        assert_eq!(expr.simplify(), Expr::var("x").pow(Expr::from(2.0)));

        // x / x = 1
        let expr = Expr::var("x") / Expr::var("x");
        assert_eq!(expr.simplify(), Expr::one());
    }

    #[test]
    fn power_patterns_collapse_to_identities() {
        // x^1 * (1/x) reduces through x^(1-1) = x^0 = 1
        let expr = Expr::var("x").pow(Expr::from(1.0)) * (Expr::one() / Expr::var("x"));
        assert_eq!(expr.simplify(), Expr::one());

        // x^2 * (3/x) reduces through 3 * x^1 = 3 * x
        let expr = Expr::var("x").pow(Expr::from(2.0)) * (Expr::from(3.0) / Expr::var("x"));
        assert_eq!(expr.simplify(), Expr::from(3.0) * Expr::var("x"));
    }

    #[test]
    fn patterns_require_a_shared_base() {
        let expr = Expr::var("x").pow(Expr::from(2.0)) * Expr::var("y").pow(Expr::from(3.0));
        assert_eq!(expr.simplify(), expr);

        let expr = Expr::var("x") / Expr::var("y");
        assert_eq!(expr.simplify(), expr);
    }

    #[test]
    fn unmatched_nodes_are_returned_unchanged() {
        let expr = Expr::call("sin", vec![Expr::var("x")]);
        assert_eq!(expr.simplify(), expr);

        let expr = Expr::var("x") + Expr::var("y");
        assert_eq!(expr.simplify(), expr);
    }

    #[test]
    fn simplify_is_idempotent() {
        let exprs = [
            Expr::zero() + Expr::var("x") * Expr::one(),
            Expr::var("x").pow(Expr::from(3.0)) * Expr::var("x").pow(Expr::from(2.0)),
            -(-Expr::var("x")),
            Expr::call("sin", vec![Expr::var("x") + Expr::zero()]),
            Expr::call("foo", vec![Expr::from(1.0), Expr::var("y")]),
            (Expr::var("x") + Expr::var("y")) / (Expr::var("x") - Expr::var("y")),
            Expr::from(2.0) * (Expr::one() / Expr::var("x")),
        ];

        for expr in exprs {
            let once = expr.simplify();
            let twice = once.simplify();
            assert_eq!(once, twice, "simplify was not idempotent for {}", expr);
        }
    }

    #[test]
    fn simplification_preserves_value() {
        let x = || Expr::var("x");

        // trees are built by hand because `parse` already simplifies its result
        let cases = [
            x() * Expr::one() + Expr::zero() + x(),
            x().pow(Expr::from(3.0)) * x().pow(Expr::from(2.0))
                + x().pow(Expr::from(2.0)) * (Expr::from(3.0) / x()),
            (Expr::from(2.0) * x()) / x() + Expr::call("sin", vec![x()]) * Expr::one(),
            -(-x()) + Expr::one().pow(x()) + x().pow(Expr::zero()),
            (Expr::from(2.0) + Expr::from(3.0)) * x() - x() / Expr::one(),
        ];
        let bindings = [-2.5, -1.0, 0.5, 1.0, 3.75];

        for expr in cases {
            let simplified = expr.simplify();
            for value in bindings {
                let mut ctxt = Ctxt::new();
                ctxt.add_var("x", value);
                assert_float_absolute_eq!(
                    expr.eval(&ctxt).unwrap(),
                    simplified.eval(&ctxt).unwrap(),
                    1e-9
                );
            }
        }
    }
}
