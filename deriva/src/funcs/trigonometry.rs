//! Trigonometric functions.

use crate::parser::ast::Expr;
use crate::symbolic::derivative::Differentiate;
use deriva_error::Error;
use super::Function;

/// The sine function, `sin(x)`, in radians.
#[derive(Debug)]
pub struct Sin;

impl Function for Sin {
    fn name(&self) -> &'static str {
        "sin"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        args[0].sin()
    }

    /// `sin(u)' = cos(u) * u'`
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let u = &args[0];
        Ok(Expr::call("cos", vec![u.clone()]) * u.differentiate(var)?)
    }
}

/// The cosine function, `cos(x)`, in radians.
#[derive(Debug)]
pub struct Cos;

impl Function for Cos {
    fn name(&self) -> &'static str {
        "cos"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        args[0].cos()
    }

    /// `cos(u)' = -sin(u) * u'`
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let u = &args[0];
        Ok(-Expr::call("sin", vec![u.clone()]) * u.differentiate(var)?)
    }
}
