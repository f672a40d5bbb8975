//! Functions related to exponentials and logarithms.

use crate::parser::ast::Expr;
use crate::symbolic::derivative::Differentiate;
use deriva_error::Error;
use super::Function;

/// The natural exponential function, `exp(x)`.
#[derive(Debug)]
pub struct Exp;

impl Function for Exp {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        args[0].exp()
    }

    /// `exp(u)' = exp(u) * u'`
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let u = &args[0];
        Ok(Expr::call("exp", vec![u.clone()]) * u.differentiate(var)?)
    }
}

/// The natural logarithm, `ln(x)`.
///
/// Inputs outside the domain follow IEEE-754: `ln(0)` is negative infinity and `ln` of a
/// negative number is NaN.
#[derive(Debug)]
pub struct Ln;

impl Function for Ln {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        args[0].ln()
    }

    /// `ln(u)' = u' / u`
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let u = &args[0];
        Ok(u.differentiate(var)? / u.clone())
    }
}
