//! An operator-precedence (shunting-yard) parser for mathematical expressions.
//!
//! The parser maintains three stacks: pending operators and markers, output expressions, and one
//! argument counter per open function call. Precedence and associativity live on the operator
//! kinds in [`op`]; function-call syntax is recognized by an identifier immediately followed by
//! `(`.
//!
//! The parsed tree is passed once through the [simplifier](crate::symbolic::simplify) before
//! being returned, so `parse("2 + 3 * 4")` yields the constant `14` directly. The arity of
//! function calls is *not* checked here — `sin(1, 2)` parses successfully and fails when
//! evaluated.

pub mod ast;
pub mod error;
pub mod op;

use crate::consts;
use crate::symbolic::simplify::Simplify;
use crate::tokenizer::{tokenize_complete, TokenKind};
use ast::{Binary, Expr};
use deriva_error::Error;
use error::kind;
use op::{Associativity, BinOpKind, Precedence};
use std::ops::Range;

/// Parse an [`Expr`] tree from source text.
pub fn parse(input: &str) -> Result<Expr, Error> {
    Parser::new(input).parse()
}

/// An operator waiting on the stack for its operands.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackOp {
    /// A binary operator.
    Bin(BinOpKind),

    /// Unary negation, produced by a `-` in prefix position.
    Neg,
}

impl StackOp {
    fn precedence(self) -> Precedence {
        match self {
            Self::Bin(op) => op.precedence(),
            Self::Neg => op::UnaryOpKind::Neg.precedence(),
        }
    }

    fn associativity(self) -> Associativity {
        match self {
            Self::Bin(op) => op.associativity(),
            Self::Neg => op::UnaryOpKind::Neg.associativity(),
        }
    }
}

/// An entry on the operator stack.
#[derive(Debug)]
enum StackEntry<'source> {
    /// A pending operator.
    Op { op: StackOp, span: Range<usize> },

    /// An open parenthesis. `call` is true when the parenthesis opens a function's argument
    /// list rather than a grouping.
    Paren { call: bool, span: Range<usize> },

    /// A function-call marker, pushed when an identifier is immediately followed by `(`.
    Func { name: &'source str, span: Range<usize> },
}

/// The last significant token, used to decide whether `-` is unary negation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Prev {
    Start,
    Op,
    OpenParen,
    Comma,
    Operand,
}

/// A parser for converting a string into an expression tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    input: &'source str,
}

impl<'source> Parser<'source> {
    /// Creates a parser for the given source text.
    pub fn new(input: &'source str) -> Self {
        Self { input }
    }

    /// Parses the source text into a simplified expression.
    pub fn parse(&self) -> Result<Expr, Error> {
        let tokens = tokenize_complete(self.input)?
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect::<Vec<_>>();

        let mut operators: Vec<StackEntry> = Vec::new();
        let mut output: Vec<Expr> = Vec::new();
        let mut argc: Vec<usize> = Vec::new();
        let mut prev = Prev::Start;

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Whitespace => unreachable!("whitespace is filtered out above"),

                TokenKind::Num => {
                    let value: f64 = token.lexeme.parse().map_err(|_| {
                        Error::new(vec![token.span.clone()], kind::InvalidNumber {
                            literal: token.lexeme.to_string(),
                        })
                    })?;
                    output.push(Expr::from(value));
                },

                TokenKind::Name => {
                    // an identifier immediately followed by `(` is a function call
                    let is_call = tokens
                        .get(i + 1)
                        .map(|next| next.kind == TokenKind::OpenParen)
                        .unwrap_or(false);

                    if is_call {
                        operators.push(StackEntry::Func {
                            name: token.lexeme,
                            span: token.span.clone(),
                        });
                    } else if let Some(value) = consts::reserved(token.lexeme) {
                        output.push(Expr::from(value));
                    } else {
                        output.push(Expr::var(token.lexeme));
                    }
                },

                TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Exp => {
                    let op = if token.kind == TokenKind::Sub
                        && matches!(prev, Prev::Start | Prev::Op | Prev::OpenParen | Prev::Comma)
                    {
                        StackOp::Neg
                    } else {
                        StackOp::Bin(BinOpKind::from_token(token.kind).unwrap())
                    };

                    // pop waiting operators that bind at least as tightly; right-first
                    // operators are not popped by an equal-precedence incoming operator
                    while let Some(StackEntry::Op { op: top, .. }) = operators.last() {
                        let pops = top.precedence() > op.precedence()
                            || (top.precedence() == op.precedence()
                                && op.associativity() == Associativity::Left);
                        if !pops {
                            break;
                        }

                        let Some(StackEntry::Op { op: top, span }) = operators.pop() else {
                            unreachable!("checked by the loop condition");
                        };
                        reduce(top, span, &mut output)?;
                    }

                    operators.push(StackEntry::Op { op, span: token.span.clone() });
                },

                TokenKind::OpenParen => {
                    // a parenthesis directly after a function marker opens its argument list
                    let call = matches!(operators.last(), Some(StackEntry::Func { .. }));
                    if call {
                        argc.push(0);
                    }
                    operators.push(StackEntry::Paren { call, span: token.span.clone() });
                },

                TokenKind::Comma => {
                    loop {
                        match operators.last() {
                            Some(StackEntry::Op { .. }) => {
                                let Some(StackEntry::Op { op, span }) = operators.pop() else {
                                    unreachable!("checked by the match");
                                };
                                reduce(op, span, &mut output)?;
                            },
                            Some(StackEntry::Paren { call: true, .. }) => break,
                            _ => {
                                return Err(Error::new(
                                    vec![token.span.clone()],
                                    kind::CommaOutsideCall,
                                ));
                            },
                        }
                    }

                    *argc.last_mut().unwrap() += 1;
                },

                TokenKind::CloseParen => {
                    loop {
                        match operators.last() {
                            Some(StackEntry::Op { .. }) => {
                                let Some(StackEntry::Op { op, span }) = operators.pop() else {
                                    unreachable!("checked by the match");
                                };
                                reduce(op, span, &mut output)?;
                            },
                            Some(StackEntry::Paren { .. }) => break,
                            _ => {
                                return Err(Error::new(
                                    vec![token.span.clone()],
                                    kind::UnmatchedParenthesis { opening: false },
                                ));
                            },
                        }
                    }
                    operators.pop();

                    // if a function marker is beneath the parenthesis, gather the arguments
                    if let Some(StackEntry::Func { .. }) = operators.last() {
                        let Some(StackEntry::Func { name, span }) = operators.pop() else {
                            unreachable!("checked by the match");
                        };

                        let count = argc.pop().unwrap_or(0) + 1;
                        if output.len() < count {
                            return Err(Error::new(vec![span], kind::MissingValue));
                        }

                        let args = output.split_off(output.len() - count);
                        output.push(Expr::call(name, args));
                    }
                },
            }

            prev = match token.kind {
                TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Exp => Prev::Op,
                TokenKind::OpenParen => Prev::OpenParen,
                TokenKind::Comma => Prev::Comma,
                _ => Prev::Operand,
            };
        }

        // reduce everything left on the stack
        while let Some(entry) = operators.pop() {
            match entry {
                StackEntry::Op { op, span } => reduce(op, span, &mut output)?,
                StackEntry::Paren { span, .. } | StackEntry::Func { span, .. } => {
                    return Err(Error::new(vec![span], kind::UnmatchedParenthesis {
                        opening: true,
                    }));
                },
            }
        }

        match output.len() {
            1 => Ok(output.pop().unwrap().simplify()),
            0 => Err(Error::new(vec![0..self.input.len()], kind::MissingValue)),
            _ => Err(Error::spanless(kind::MissingOperator)),
        }
    }
}

/// Pops the operands of `op` off the output stack and pushes the reduced node.
fn reduce(op: StackOp, span: Range<usize>, output: &mut Vec<Expr>) -> Result<(), Error> {
    match op {
        StackOp::Neg => {
            let operand = output
                .pop()
                .ok_or_else(|| Error::new(vec![span.clone()], kind::MissingValue))?;
            output.push(-operand);
        },
        StackOp::Bin(op) => {
            let rhs = output
                .pop()
                .ok_or_else(|| Error::new(vec![span.clone()], kind::MissingValue))?;
            let lhs = output
                .pop()
                .ok_or_else(|| Error::new(vec![span.clone()], kind::MissingValue))?;
            output.push(Expr::Binary(Binary::new(op, lhs, rhs)));
        },
    }

    Ok(())
}
