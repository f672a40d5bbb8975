//! Errors that can occur while evaluating an expression.

pub mod kind;

pub use deriva_error::Error;
