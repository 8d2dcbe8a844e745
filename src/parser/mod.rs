mod ast;
mod combinators;
mod error;
mod grammar;
mod locations;
pub mod tokenizer;

pub use ast::{Operator, ParseNode};
pub use error::{LexError, ParseError};
pub use grammar::{parse, parse_with_diagnostics, ParseOutcome};
pub use locations::{Locatable, Span};
pub use tokenizer::{token_listing, tokenize, Lexer, Token, TokenType};

/// Lexes and strictly parses `source`.
pub fn parse_str(source: &str) -> Result<ParseNode, crate::Error> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}
