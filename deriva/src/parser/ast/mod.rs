//! The expression tree produced by the parser.
//!
//! Each node kind lives in its own module; the closed [`Expr`](expr::Expr) union ties them
//! together. Nodes are never mutated after construction: every transformation over a tree
//! produces a new tree, possibly sharing untouched subtrees.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::Expr;
pub use literal::{Constant, Variable};
pub use unary::Unary;
