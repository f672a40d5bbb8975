//! Converts source text into a flat sequence of [`Token`]s.
//!
//! Whitespace is kept in the raw stream so spans stay contiguous; the parser filters it out.
//! Any character that does not start a token fails immediately with
//! [`InvalidCharacter`](crate::parser::error::kind::InvalidCharacter).

pub mod token;

use crate::parser::error::kind::InvalidCharacter;
use deriva_error::Error;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, failing on the
/// first character that cannot start a token.
pub fn tokenize_complete(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                return Err(Error::new(
                    vec![lexer.span()],
                    InvalidCharacter {
                        character: lexer.slice().chars().next().unwrap_or('\0'),
                    },
                ));
            },
        }
    }

    Ok(tokens)
}
