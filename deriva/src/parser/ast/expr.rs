use crate::parser::op::{BinOpKind, UnaryOpKind};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};
use super::{Binary, Call, Constant, Unary, Variable};

/// A mathematical expression: the closed union over all node kinds.
///
/// Expressions form immutable, persistent trees. They are created by the parser or as the output
/// of differentiation / simplification, and are never modified afterward.
///
/// The [`PartialEq`] implementation is structural, with `Add` and `Mul` treated as commutative;
/// see [`Binary`]'s documentation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value, such as `2` or `pi`.
    Constant(Constant),

    /// A variable, such as `x`.
    Variable(Variable),

    /// An operation on two expressions, such as `x + 1`.
    Binary(Binary),

    /// An operation on one expression: negation.
    Unary(Unary),

    /// A function call, such as `sin(x)`.
    Call(Call),
}

impl Expr {
    /// A constant with a value of zero.
    pub fn zero() -> Self {
        Self::from(0.0)
    }

    /// A constant with a value of one.
    pub fn one() -> Self {
        Self::from(1.0)
    }

    /// Creates a variable expression with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// Creates a function call expression.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call(Call::new(name, args))
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exp: Expr) -> Self {
        Self::Binary(Binary::new(BinOpKind::Exp, self, exp))
    }

    /// If the expression is a [`Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(constant) => Some(constant.value),
            _ => None,
        }
    }

    /// If the expression is a [`Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(variable) => Some(&variable.name),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }

    /// Returns true if the expression is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.as_constant() == Some(1.0)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(Constant::new(value))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(constant) => write!(f, "{}", constant),
            Self::Variable(variable) => write!(f, "{}", variable),
            Self::Binary(binary) => write!(f, "{}", binary),
            Self::Unary(unary) => write!(f, "{}", unary),
            Self::Call(call) => write!(f, "{}", call),
        }
    }
}

// operator overloads to make constructing expressions easier, both in the differentiation /
// simplification rules and in tests

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Binary(Binary::new(BinOpKind::Add, self, rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Binary(Binary::new(BinOpKind::Sub, self, rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Binary(Binary::new(BinOpKind::Mul, self, rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Binary(Binary::new(BinOpKind::Div, self, rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Unary(Unary::new(UnaryOpKind::Neg, self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operator_overloads_build_nodes() {
        let expr = Expr::var("x") * Expr::from(2.0) + Expr::one();
        assert_eq!(expr, Expr::Binary(Binary::new(
            BinOpKind::Add,
            Expr::Binary(Binary::new(BinOpKind::Mul, Expr::var("x"), Expr::from(2.0))),
            Expr::from(1.0),
        )));
    }

    #[test]
    fn display_round_trip() {
        let expr = (Expr::var("x").pow(Expr::from(2.0)) - Expr::one()) / Expr::var("y");
        assert_eq!(expr.to_string(), "(((x ^ 2) - 1) / y)");
    }

    #[test]
    fn commutative_equality_is_not_deep_reordering() {
        // commutativity applies per node, not across nesting levels
        let a = (Expr::var("a") + Expr::var("b")) + Expr::var("c");
        let b = Expr::var("c") + (Expr::var("b") + Expr::var("a"));
        assert_eq!(a, b);

        let c = Expr::var("a") + (Expr::var("b") + Expr::var("c"));
        assert_ne!(a, c);
    }
}
