//! A small symbolic expression engine.
//!
//! The engine parses infix mathematical text into an immutable expression tree ([`Expr`]), then
//! operates on that tree polymorphically: numerical evaluation against a set of variable /
//! function bindings ([`Eval`]), symbolic differentiation ([`Differentiate`]), and best-effort
//! algebraic simplification ([`Simplify`]).
//!
//! ```
//! use deriva::{parse, Ctxt, Differentiate, Eval, Simplify};
//!
//! let expr = parse("ln(x)").unwrap();
//! let derivative = expr.differentiate("x").unwrap().simplify();
//! assert_eq!(derivative.to_string(), "(1 / x)");
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 2.0);
//! assert_eq!(derivative.eval(&ctxt).unwrap(), 0.5);
//! ```

pub mod consts;
pub mod funcs;
pub mod numerical;
pub mod parser;
pub mod symbolic;
pub mod tokenizer;

pub use deriva_error::Error;
pub use numerical::{ctxt::Ctxt, eval::Eval};
pub use parser::{ast::expr::Expr, parse};
pub use symbolic::{derivative::Differentiate, simplify::Simplify};
