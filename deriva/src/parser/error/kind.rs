//! All the syntax error kinds. Each struct is one failure mode; they all fail fast, so no
//! partial expression tree ever escapes the parser.

use ariadne::Fmt;
use deriva_error::{Category, ErrorKind, EXPR};

/// A character that cannot start any token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,
}

impl ErrorKind for InvalidCharacter {
    fn category(&self) -> Category {
        Category::Syntax
    }

    fn message(&self) -> String {
        format!("invalid character `{}`", self.character)
    }

    fn labels(&self) -> Vec<String> {
        vec![String::from("this character")]
    }
}

/// A numeric literal that does not form a valid number, such as `1.2.3`.
///
/// The tokenizer accepts any maximal run of digits and dots; runs that fail to parse as a number
/// are rejected here instead.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The raw literal text.
    pub literal: String,
}

impl ErrorKind for InvalidNumber {
    fn category(&self) -> Category {
        Category::Syntax
    }

    fn message(&self) -> String {
        format!("`{}` is not a valid number", self.literal)
    }

    fn labels(&self) -> Vec<String> {
        vec![String::from("this literal")]
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "a number contains {} decimal point",
            "at most one".fg(EXPR)
        ))
    }
}

/// Two values appear in sequence with no operator joining them.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperator;

impl ErrorKind for MissingOperator {
    fn category(&self) -> Category {
        Category::Syntax
    }

    fn message(&self) -> String {
        String::from("missing operator")
    }

    fn help(&self) -> Option<String> {
        Some(String::from(
            "two values appear in sequence; join them with an operator such as `+` or `*`",
        ))
    }
}

/// An operator is missing one of its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingValue;

impl ErrorKind for MissingValue {
    fn category(&self) -> Category {
        Category::Syntax
    }

    fn message(&self) -> String {
        String::from("missing value")
    }

    fn labels(&self) -> Vec<String> {
        vec![String::from("an expression is missing near here")]
    }
}

/// A parenthesis without a partner.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnmatchedParenthesis {
    fn category(&self) -> Category {
        Category::Syntax
    }

    fn message(&self) -> String {
        String::from("unmatched parenthesis")
    }

    fn labels(&self) -> Vec<String> {
        vec![if self.opening {
            String::from("this parenthesis is not closed")
        } else {
            String::from("this parenthesis has no matching `(`")
        }]
    }

    fn help(&self) -> Option<String> {
        Some(if self.opening {
            format!("add a closing parenthesis {} somewhere after this", ")".fg(EXPR))
        } else {
            format!("add an opening parenthesis {} somewhere before this", "(".fg(EXPR))
        })
    }
}

/// A comma outside the argument list of a function call.
#[derive(Debug, Clone, PartialEq)]
pub struct CommaOutsideCall;

impl ErrorKind for CommaOutsideCall {
    fn category(&self) -> Category {
        Category::Syntax
    }

    fn message(&self) -> String {
        String::from("comma outside of a function call")
    }

    fn labels(&self) -> Vec<String> {
        vec![String::from("this comma")]
    }

    fn help(&self) -> Option<String> {
        Some(String::from(
            "commas can only separate the arguments of a function call, like `max(1, 2)`",
        ))
    }
}
