use crate::interpreter::EvalError;
use crate::parser::{LexError, ParseError};

/// Any failure of the source-to-value pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("lexing failed: {0}")]
    Lex(#[from] LexError),
    #[error("parsing failed: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
    #[error("Please enter an expression.")]
    EmptyInput,
}
