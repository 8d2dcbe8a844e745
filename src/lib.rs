mod error;
pub use error::Error;

mod parser;
pub use parser::{
    parse, parse_str, parse_with_diagnostics, token_listing, tokenize, LexError, Lexer,
    Locatable, Operator, ParseError, ParseNode, ParseOutcome, Span, Token, TokenType,
};

mod interpreter;
pub use interpreter::{EvalError, Evaluator, SymbolTable, DEFAULT_BINDINGS};

mod session;
pub use session::{Report, Session};

/// Lexes, strictly parses and evaluates `source` against the default bindings.
pub fn evaluate_str(source: &str) -> Result<f64, Error> {
    let tree = parse_str(source)?;
    Ok(Evaluator::new().evaluate(&tree)?)
}
