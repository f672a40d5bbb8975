use crate::parser::op::UnaryOpKind;
use std::fmt::{self, Display, Formatter};
use super::expr::Expr;

/// A unary operation applied to an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operation being applied.
    pub op: UnaryOpKind,

    /// The operand.
    pub operand: Box<Expr>,
}

impl Unary {
    /// Creates a unary operation node from its operand.
    pub fn new(op: UnaryOpKind, operand: Expr) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }
}

impl Display for Unary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.op {
            UnaryOpKind::Neg => write!(f, "-({})", self.operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!((-Expr::var("x")).to_string(), "-(x)");
        assert_eq!((-(Expr::var("x") + Expr::from(1.0))).to_string(), "-((x + 1))");
    }
}
