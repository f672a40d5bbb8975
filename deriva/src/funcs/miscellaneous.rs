//! Miscellaneous functions: absolute value, sign, maximum, and the Heaviside step.

use crate::parser::ast::Expr;
use crate::symbolic::derivative::Differentiate;
use deriva_error::Error;
use super::Function;

/// The absolute value function, `abs(x)`.
#[derive(Debug)]
pub struct Abs;

impl Function for Abs {
    fn name(&self) -> &'static str {
        "abs"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        args[0].abs()
    }

    /// `abs(u)' = sign(u) * u'` (the non-differentiable point at zero is ignored)
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let u = &args[0];
        Ok(Expr::call("sign", vec![u.clone()]) * u.differentiate(var)?)
    }
}

/// The sign function, `sign(x)`: `-1` for negative input, `1` for positive input, and signed
/// zero for zero input.
#[derive(Debug)]
pub struct Sign;

impl Function for Sign {
    fn name(&self) -> &'static str {
        "sign"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        let n = args[0];
        // `f64::signum` maps zero to ±1; this function preserves it
        if n == 0.0 {
            n
        } else {
            n.signum()
        }
    }

    /// `sign(u)' = 0` (the jump at zero is ignored)
    fn derivative(&self, _args: &[Expr], _var: &str) -> Result<Expr, Error> {
        Ok(Expr::zero())
    }
}

/// The maximum of two values, `max(a, b)`.
#[derive(Debug)]
pub struct Max;

impl Function for Max {
    fn name(&self) -> &'static str {
        "max"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        args[0].max(args[1])
    }

    /// The derivative of `max(a, b)` is modeled as a branch selector: heaviside of the
    /// difference `max(a, b) - a` picks whichever side currently dominates, so
    ///
    /// `max(a, b)' = heaviside(max(a, b) - a) * b' + heaviside(-(max(a, b) - a)) * a'`
    ///
    /// This is a subgradient-style approximation. At `a == b` the difference is zero, both
    /// heaviside factors are one, and the rule yields `a' + b'`; the tie behavior is inherently
    /// ambiguous and is left as-is.
    fn derivative(&self, args: &[Expr], var: &str) -> Result<Expr, Error> {
        let (a, b) = (&args[0], &args[1]);
        let condition = Expr::call("max", vec![a.clone(), b.clone()]) - a.clone();

        Ok(Expr::call("heaviside", vec![condition.clone()]) * b.differentiate(var)?
            + Expr::call("heaviside", vec![-condition]) * a.differentiate(var)?)
    }
}

/// The Heaviside step function, `heaviside(x)`: `0` for negative input, `1` otherwise.
#[derive(Debug)]
pub struct Heaviside;

impl Function for Heaviside {
    fn name(&self) -> &'static str {
        "heaviside"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn eval(&self, args: &[f64]) -> f64 {
        if args[0] < 0.0 {
            0.0
        } else {
            1.0
        }
    }

    /// `heaviside(u)' = 0` (the jump at zero is ignored)
    fn derivative(&self, _args: &[Expr], _var: &str) -> Result<Expr, Error> {
        Ok(Expr::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_preserves_signed_zero() {
        assert_eq!(Sign.eval(&[3.5]), 1.0);
        assert_eq!(Sign.eval(&[-2.0]), -1.0);
        assert_eq!(Sign.eval(&[0.0]), 0.0);
        assert!(Sign.eval(&[f64::NAN]).is_nan());
    }

    #[test]
    fn heaviside_step() {
        assert_eq!(Heaviside.eval(&[-0.1]), 0.0);
        assert_eq!(Heaviside.eval(&[0.0]), 1.0);
        assert_eq!(Heaviside.eval(&[2.0]), 1.0);
    }

    #[test]
    fn max_eval() {
        assert_eq!(Max.eval(&[1.0, 2.0]), 2.0);
        assert_eq!(Max.eval(&[-1.0, -2.0]), -1.0);
    }
}
