use super::locations::Span;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unrecognized character '{character}' at {position}")]
    UnexpectedCharacter { character: char, position: Span },
}

/// A structural violation of the grammar. Every variant carries the
/// offending lexeme (empty for the end marker) and where it was found.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected operand, found {} at {position}", describe(.found))]
    ExpectedOperand { found: String, position: Span },
    #[error("expected ')', found {} at {position}", describe(.found))]
    ExpectedClosingParen { found: String, position: Span },
    #[error("unexpected token after expression: '{found}' at {position}")]
    TrailingTokens { found: String, position: Span },
}

impl ParseError {
    pub fn position(&self) -> Span {
        match self {
            Self::ExpectedOperand { position, .. }
            | Self::ExpectedClosingParen { position, .. }
            | Self::TrailingTokens { position, .. } => *position,
        }
    }
}

fn describe(lexeme: &str) -> String {
    if lexeme.is_empty() {
        "end of input".to_string()
    } else {
        format!("'{lexeme}'")
    }
}
