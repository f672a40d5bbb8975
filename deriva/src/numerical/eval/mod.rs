//! The [`Eval`] trait, implemented for every expression node.
//!
//! Evaluation is a total structural recursion for well-formed trees: it fails only on unbound
//! names and arity mismatches. Arithmetic itself follows IEEE-754 semantics — division by zero
//! yields signed infinity or NaN, and overflow propagates silently.

pub mod binary;
pub mod call;
pub mod literal;
pub mod unary;

use crate::parser::ast::Expr;
use deriva_error::Error;
use super::ctxt::Ctxt;

/// Evaluates an expression node to a numeric value in a given context.
pub trait Eval {
    /// Evaluate the node, consulting `ctxt` for variable and function bindings.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Constant(constant) => constant.eval(ctxt),
            Expr::Variable(variable) => variable.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use deriva_error::Category;
    use super::*;

    /// Parses and evaluates the input in the given context.
    fn eval_str(input: &str, ctxt: &Ctxt) -> Result<f64, Error> {
        parse(input).unwrap().eval(ctxt)
    }

    #[test]
    fn arithmetic() {
        let ctxt = Ctxt::new();
        assert_eq!(eval_str("2 + 3 * 4", &ctxt).unwrap(), 14.0);
        assert_eq!(eval_str("2 ^ 10", &ctxt).unwrap(), 1024.0);
        assert_eq!(eval_str("7 - 2 - 1", &ctxt).unwrap(), 4.0);
    }

    #[test]
    fn variables_resolve_against_the_context() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 3.0);
        assert_eq!(eval_str("x ^ 2 + 1", &ctxt).unwrap(), 10.0);

        let err = eval_str("x + y", &ctxt).unwrap_err();
        assert_eq!(err.kind.category(), Category::Lookup);
        assert_eq!(err.kind.message(), "`y` is not defined");
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 0.0);
        // the expressions keep a free variable so the parse-time simplifier cannot fold them
        // (`x / x` itself would cancel to 1 during parsing)
        assert_eq!(eval_str("1 / x", &ctxt).unwrap(), f64::INFINITY);
        assert_eq!(eval_str("-1 / x", &ctxt).unwrap(), f64::NEG_INFINITY);
        assert!(eval_str("(x + x) / x", &ctxt).unwrap().is_nan());
    }

    #[test]
    fn builtin_calls() {
        let ctxt = Ctxt::new();
        assert_eq!(eval_str("abs(3 - 5)", &ctxt).unwrap(), 2.0);
        assert_eq!(eval_str("max(2, 7)", &ctxt).unwrap(), 7.0);
    }

    #[test]
    fn unknown_functions_fail_with_lookup_errors() {
        let ctxt = Ctxt::new();
        let err = eval_str("foo(1)", &ctxt).unwrap_err();
        assert_eq!(err.kind.category(), Category::Lookup);
        assert_eq!(err.kind.message(), "the `foo` function does not exist");
    }

    #[test]
    fn arity_is_validated_at_evaluation_time() {
        let ctxt = Ctxt::new();

        let err = eval_str("sin(1, 2)", &ctxt).unwrap_err();
        assert_eq!(err.kind.category(), Category::Arity);
        assert_eq!(
            err.kind.message(),
            "too many arguments were given to the `sin` function",
        );

        let err = eval_str("max(1)", &ctxt).unwrap_err();
        assert_eq!(err.kind.category(), Category::Arity);
        assert_eq!(err.kind.message(), "missing argument(s) for the `max` function");
    }

    #[test]
    fn context_functions_shadow_builtins() {
        use crate::funcs::Function;
        use std::sync::Arc;

        /// `sin` redefined to always return zero.
        #[derive(Debug)]
        struct FlatSin;

        impl Function for FlatSin {
            fn name(&self) -> &'static str {
                "sin"
            }

            fn arity(&self) -> Option<usize> {
                Some(1)
            }

            fn eval(&self, _args: &[f64]) -> f64 {
                0.0
            }
        }

        let mut ctxt = Ctxt::new();
        ctxt.add_func(Arc::new(FlatSin));
        ctxt.add_var("x", 1.0);
        // keep a free variable so the call survives parse-time folding
        assert_eq!(eval_str("sin(x)", &ctxt).unwrap(), 0.0);
    }
}
