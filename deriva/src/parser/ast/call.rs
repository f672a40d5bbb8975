use std::fmt::{self, Display, Formatter};
use super::expr::Expr;

/// A function call, such as `sin(x)` or `max(a, b)`.
///
/// Argument order is semantically significant and preserved end-to-end. The arity of the call is
/// not checked at parse time; it is validated against the function's definition when the call is
/// evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The name of the function.
    pub name: String,

    /// The arguments being passed to the function.
    pub args: Vec<Expr>,
}

impl Call {
    /// Creates a function call node.
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self { name: name.into(), args }
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        let mut iter = self.args.iter();
        if let Some(arg) = iter.next() {
            write!(f, "{}", arg)?;
            for arg in iter {
                write!(f, ", {}", arg)?;
            }
        }
        write!(f, ")")
    }
}
