//! Errors that can occur during symbolic manipulation.

use deriva_error::{Category, ErrorKind};

/// A function call could not be differentiated, either because the function is not registered or
/// because it has no derivative rule.
#[derive(Debug, Clone, PartialEq)]
pub struct NonDifferentiableFunction {
    /// The name of the function.
    pub name: String,
}

impl ErrorKind for NonDifferentiableFunction {
    fn category(&self) -> Category {
        Category::Derivative
    }

    fn message(&self) -> String {
        format!("the `{}` function cannot be differentiated", self.name)
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "no derivative rule is registered for `{}`",
            self.name
        ))
    }
}
