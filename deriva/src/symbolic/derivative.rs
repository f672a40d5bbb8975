//! Symbolic differentiation of expression trees.
//!
//! [`Differentiate`] is a syntax-directed structural recursion: each node kind contributes its
//! calculus rule, and function calls dispatch to the derivative rule registered with the
//! function's definition. The output is a new tree and is generally unsimplified; callers pass
//! it through the [simplifier](crate::symbolic::simplify) when a tidy result matters.

use crate::funcs;
use crate::parser::ast::{Binary, Call, Constant, Expr, Unary, Variable};
use crate::parser::op::BinOpKind;
use deriva_error::Error;
use super::error::NonDifferentiableFunction;

/// Differentiates an expression node with respect to a variable.
pub trait Differentiate {
    /// Returns the derivative of this node with respect to `var`.
    ///
    /// Fails when a function call is encountered whose definition is missing or has no
    /// derivative rule.
    fn differentiate(&self, var: &str) -> Result<Expr, Error>;
}

impl Differentiate for Expr {
    fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        match self {
            Expr::Constant(constant) => constant.differentiate(var),
            Expr::Variable(variable) => variable.differentiate(var),
            Expr::Binary(binary) => binary.differentiate(var),
            Expr::Unary(unary) => unary.differentiate(var),
            Expr::Call(call) => call.differentiate(var),
        }
    }
}

impl Differentiate for Constant {
    fn differentiate(&self, _var: &str) -> Result<Expr, Error> {
        Ok(Expr::zero())
    }
}

impl Differentiate for Variable {
    fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        if self.name == var {
            Ok(Expr::one())
        } else {
            Ok(Expr::zero())
        }
    }
}

impl Differentiate for Binary {
    fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        let u = &*self.lhs;
        let v = &*self.rhs;
        let u_prime = u.differentiate(var)?;
        let v_prime = v.differentiate(var)?;

        match self.op {
            BinOpKind::Add => Ok(u_prime + v_prime),
            BinOpKind::Sub => Ok(u_prime - v_prime),
            // (u * v)' = u' * v + u * v'
            BinOpKind::Mul => Ok(u_prime * v.clone() + u.clone() * v_prime),
            // (u / v)' = (u' * v - u * v') / v^2
            BinOpKind::Div => Ok((u_prime * v.clone() - u.clone() * v_prime)
                / v.clone().pow(Expr::from(2.0))),
            // (u ^ v)' = u^v * (v' * ln(u) + v * u' / u), valid where u > 0
            BinOpKind::Exp => {
                let term = v_prime * Expr::call("ln", vec![u.clone()])
                    + v.clone() * (u_prime / u.clone());
                Ok(Expr::Binary(self.clone()) * term)
            },
        }
    }
}

impl Differentiate for Unary {
    fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        Ok(-self.operand.differentiate(var)?)
    }
}

impl Differentiate for Call {
    fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        let definition = funcs::get(&self.name).ok_or_else(|| {
            Error::spanless(NonDifferentiableFunction {
                name: self.name.clone(),
            })
        })?;

        definition.derivative(&self.args, var)
    }
}

#[cfg(test)]
mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use crate::parser::parse;
    use crate::symbolic::simplify::Simplify;
    use deriva_error::Category;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates an expression with `x` bound to the given value.
    fn eval_x(expr: &Expr, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        expr.eval(&ctxt).unwrap()
    }

    /// Approximates the derivative of the expression at `x` with a central finite difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const H: f64 = 1e-6;
        (eval_x(expr, x + H) - eval_x(expr, x - H)) / (2.0 * H)
    }

    /// Checks that the symbolic derivative of `function` matches a finite-difference
    /// approximation at each of the given points.
    fn check_derivative(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = parse(function).unwrap();
        let derivative = expr.differentiate("x").unwrap().simplify();

        for point in points {
            let symbolic = eval_x(&derivative, point);
            let numeric = finite_difference(&expr, point);
            assert!(
                (symbolic - numeric).abs() < TOL,
                "for {:?} at x={}, the symbolic derivative was {} but the finite difference was {}",
                function,
                point,
                symbolic,
                numeric,
            );
        }
    }

    #[test]
    fn constants_and_variables() {
        assert_eq!(Expr::from(4.2).differentiate("x").unwrap(), Expr::zero());
        assert_eq!(Expr::var("x").differentiate("x").unwrap(), Expr::one());
        assert_eq!(Expr::var("y").differentiate("x").unwrap(), Expr::zero());
    }

    #[test]
    fn polynomials() {
        check_derivative("x^2 + x + 1", [0.0, 1.0, 2.0, 5.0, 8.0]);
        check_derivative("x^3 - 2*x", [-2.0, -0.5, 0.0, 1.5, 3.0]);
    }

    #[test]
    fn quotients() {
        check_derivative("(x + 1) / (x - 2)", [-1.0, 0.0, 1.0, 3.0]);
        check_derivative("1 / x", [-2.0, 0.5, 1.0, 4.0]);
    }

    #[test]
    fn builtin_functions() {
        check_derivative("sin(x)", [-1.0, 0.0, 0.7, 2.0]);
        check_derivative("cos(x)", [-1.0, 0.0, 0.7, 2.0]);
        check_derivative("exp(x)", [-1.0, 0.0, 1.0, 2.0]);
        check_derivative("ln(x)", [0.25, 0.5, 1.0, 2.0, 10.0]);
        // `abs` is differentiable away from zero
        check_derivative("abs(x)", [-3.0, -0.5, 0.5, 3.0]);
    }

    #[test]
    fn composed_functions() {
        check_derivative("sin(x^2)", [-1.0, 0.0, 0.5, 1.5]);
        check_derivative("exp(-(x^2))", [-1.0, 0.0, 1.0]);
        check_derivative("ln(x^2 + 1)", [-2.0, 0.0, 2.0]);
    }

    #[test]
    fn ln_derivative_evaluates_to_reciprocal() {
        let derivative = parse("ln(x)").unwrap().differentiate("x").unwrap().simplify();
        assert_eq!(eval_x(&derivative, 2.0), 0.5);
    }

    #[test]
    fn negated_power() {
        // -x^2 parses as -(x^2), so the derivative at 3 is -6
        let derivative = parse("-x^2").unwrap().differentiate("x").unwrap().simplify();
        assert_eq!(eval_x(&derivative, 3.0), -6.0);
    }

    #[test]
    fn max_picks_the_dominating_branch() {
        // d/dx max(1, x^2) = 2x wherever x^2 > 1; the branch selection is a subgradient-style
        // approximation, so only strictly-dominating points are checked
        let derivative = parse("max(1, x^2)").unwrap().differentiate("x").unwrap().simplify();
        assert_eq!(eval_x(&derivative, 2.0), 4.0);
        assert_eq!(eval_x(&derivative, -3.0), -6.0);
    }

    #[test]
    fn sign_and_heaviside_are_flat() {
        let derivative = parse("sign(x)").unwrap().differentiate("x").unwrap().simplify();
        assert_eq!(derivative, Expr::zero());

        let derivative = parse("heaviside(x)").unwrap().differentiate("x").unwrap().simplify();
        assert_eq!(derivative, Expr::zero());
    }

    #[test]
    fn unknown_functions_are_not_differentiable() {
        let err = parse("foo(x)").unwrap().differentiate("x").unwrap_err();
        assert_eq!(err.kind.category(), Category::Derivative);
        assert_eq!(err.kind.message(), "the `foo` function cannot be differentiated");

        // the failure propagates out of nested arguments too
        let err = parse("sin(foo(x))").unwrap().differentiate("x").unwrap_err();
        assert_eq!(err.kind.category(), Category::Derivative);
    }
}
