//! All the evaluation error kinds, plus the reserved numeric error kinds that the taxonomy
//! defines but no evaluation path currently raises.

use ariadne::Fmt;
use deriva_error::{Category, ErrorKind, EXPR};

/// The variable is not bound in the evaluation context.
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}

impl ErrorKind for UndefinedVariable {
    fn category(&self) -> Category {
        Category::Lookup
    }

    fn message(&self) -> String {
        format!("`{}` is not defined", self.name)
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "bind a value for {} in the evaluation context",
            (&self.name).fg(EXPR)
        ))
    }
}

/// The function is not defined in the evaluation context or the builtin registry.
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

impl ErrorKind for UndefinedFunction {
    fn category(&self) -> Category {
        Category::Lookup
    }

    fn message(&self) -> String {
        format!("the `{}` function does not exist", self.name)
    }

    fn help(&self) -> Option<String> {
        Some(if self.suggestions.is_empty() {
            String::from("see the documentation for a list of available functions")
        } else if self.suggestions.len() == 1 {
            format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
        } else {
            format!(
                "did you mean one of these functions? {}",
                self.suggestions
                    .iter()
                    .map(|s| format!("`{}`", s.fg(EXPR)))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// Too many arguments were given to a function call.
#[derive(Debug, Clone, PartialEq)]
pub struct TooManyArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

impl ErrorKind for TooManyArguments {
    fn category(&self) -> Category {
        Category::Arity
    }

    fn message(&self) -> String {
        format!("too many arguments were given to the `{}` function", self.name)
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
            (&self.name).fg(EXPR),
            self.expected,
            self.given
        ))
    }
}

/// An argument to a function call is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingArgument {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

impl ErrorKind for MissingArgument {
    fn category(&self) -> Category {
        Category::Arity
    }

    fn message(&self) -> String {
        format!("missing argument(s) for the `{}` function", self.name)
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
            (&self.name).fg(EXPR),
            self.expected,
            self.given
        ))
    }
}

/// Reserved: arithmetic produced a value outside the representable range.
///
/// No evaluation path currently raises this; overflow follows IEEE-754 semantics and propagates
/// infinity silently.
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticOverflow;

impl ErrorKind for ArithmeticOverflow {
    fn category(&self) -> Category {
        Category::Overflow
    }

    fn message(&self) -> String {
        String::from("arithmetic overflow")
    }
}

/// Reserved: an integer computation overflowed.
///
/// No evaluation path currently raises this; the engine's arithmetic is entirely `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerOverflow;

impl ErrorKind for IntegerOverflow {
    fn category(&self) -> Category {
        Category::Overflow
    }

    fn message(&self) -> String {
        String::from("integer overflow")
    }
}

/// Reserved: a floating-point computation overflowed.
///
/// No evaluation path currently raises this; overflow follows IEEE-754 semantics and propagates
/// infinity silently.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingPointOverflow;

impl ErrorKind for FloatingPointOverflow {
    fn category(&self) -> Category {
        Category::Overflow
    }

    fn message(&self) -> String {
        String::from("floating-point overflow")
    }
}

/// Reserved: a division by zero.
///
/// No evaluation path currently raises this; division by zero follows IEEE-754 semantics and
/// yields signed infinity or NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn category(&self) -> Category {
        Category::ZeroDivision
    }

    fn message(&self) -> String {
        String::from("division by zero")
    }
}
