use crate::parser::op::BinOpKind;
use std::fmt::{self, Display, Formatter};
use super::expr::Expr;

/// A binary operation applied to two expressions.
#[derive(Debug, Clone)]
pub struct Binary {
    /// The operation being applied.
    pub op: BinOpKind,

    /// The left operand.
    pub lhs: Box<Expr>,

    /// The right operand.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Creates a binary operation node from its operands.
    pub fn new(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// Structural equality. `Add` and `Mul` are commutative, so their operands compare in either
/// order; all other operations compare operands in order.
///
/// This is a comparison, not a canonicalization: simplification never reorders commutative
/// operands.
impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        if self.op != other.op {
            return false;
        }

        match self.op {
            BinOpKind::Add | BinOpKind::Mul => {
                (self.lhs == other.lhs && self.rhs == other.rhs)
                    || (self.lhs == other.rhs && self.rhs == other.lhs)
            },
            _ => self.lhs == other.lhs && self.rhs == other.rhs,
        }
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op.symbol(), self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commutative_equality() {
        let a = Binary::new(BinOpKind::Add, Expr::var("a"), Expr::var("b"));
        let b = Binary::new(BinOpKind::Add, Expr::var("b"), Expr::var("a"));
        assert_eq!(a, b);

        let a = Binary::new(BinOpKind::Mul, Expr::from(2.0), Expr::var("x"));
        let b = Binary::new(BinOpKind::Mul, Expr::var("x"), Expr::from(2.0));
        assert_eq!(a, b);
    }

    #[test]
    fn ordered_equality() {
        let a = Binary::new(BinOpKind::Sub, Expr::var("a"), Expr::var("b"));
        let b = Binary::new(BinOpKind::Sub, Expr::var("b"), Expr::var("a"));
        assert_ne!(a, b);

        let a = Binary::new(BinOpKind::Div, Expr::from(1.0), Expr::var("x"));
        let b = Binary::new(BinOpKind::Div, Expr::var("x"), Expr::from(1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_fully_parenthesized() {
        let sum = Expr::var("x") + Expr::from(1.0);
        let product = sum * Expr::from(2.0);
        assert_eq!(product.to_string(), "((x + 1) * 2)");
    }
}
