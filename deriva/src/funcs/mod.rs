//! All built-in functions provided by the engine.
//!
//! Each function is implemented as a unit `struct` implementing the [`Function`] trait, which
//! bundles the function's name, arity, numeric evaluator, and symbolic derivative rule. The
//! process-wide [registry](get) is built once and read-only afterward; evaluation contexts may
//! carry additional [`Function`]s that shadow or extend it.

pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use crate::numerical::ctxt::Ctxt;
use crate::parser::ast::Expr;
use crate::symbolic::error::NonDifferentiableFunction;
use deriva_error::Error;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// A function definition: a name, an arity, a numeric evaluator, and a symbolic derivative rule.
///
/// Definitions are immutable once registered. Implement this trait to make a custom function
/// available to an evaluation context via [`Ctxt::add_func`].
pub trait Function: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// The number of arguments the function accepts, or `None` if it is variadic.
    ///
    /// Arity is validated when a call is evaluated, never at parse time. Variadic functions
    /// receive their arguments as-is, evaluated left-to-right, with no count validation.
    fn arity(&self) -> Option<usize>;

    /// Evaluates the function.
    ///
    /// Arity has been validated by the caller. Arithmetic follows IEEE-754 semantics: domain
    /// errors yield NaN or infinity rather than failing.
    fn eval(&self, args: &[f64]) -> f64;

    /// The symbolic derivative of a call to this function, differentiated with respect to
    /// `var`. The rule is responsible for applying the chain rule to its arguments.
    ///
    /// The default implementation fails: a function without an overridden rule cannot be
    /// differentiated.
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let _ = (args, var);
        Err(Error::spanless(NonDifferentiableFunction {
            name: self.name().to_string(),
        }))
    }
}

impl Function for &'static dyn Function {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }

    fn eval(&self, args: &[f64]) -> f64 {
        (**self).eval(args)
    }

    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        (**self).derivative(args, var)
    }
}

/// The process-wide registry of builtin functions, built once on first use.
static REGISTRY: Lazy<HashMap<&'static str, &'static dyn Function>> = Lazy::new(all);

/// Returns a map of all builtin functions.
pub fn all() -> HashMap<&'static str, &'static dyn Function> {
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, &$upname as &'static dyn Function),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "sin" Sin,
        "cos" Cos,
        "exp" Exp,
        "ln" Ln,
        "abs" Abs,
        "sign" Sign,
        "max" Max,
        "heaviside" Heaviside,
    }
}

/// Get a builtin function by name.
pub fn get(name: &str) -> Option<&'static dyn Function> {
    REGISTRY.get(name).copied()
}

/// Returns the names of all builtin functions.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// Install all of the builtin functions into the given context's function map.
pub fn install(ctxt: &mut Ctxt) {
    for func in REGISTRY.values() {
        ctxt.add_func(Arc::new(*func));
    }
}
