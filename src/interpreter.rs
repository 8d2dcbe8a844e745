use log::debug;

use crate::parser::tokenizer::WHOLE_NUMBER;
use crate::parser::{Locatable, Operator, ParseNode, Span, Token, TokenType};

mod symbols;
pub use symbols::{SymbolTable, DEFAULT_BINDINGS};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("cannot divide by zero at {position}")]
    DivisionByZero { position: Span },
    #[error("unsupported operator '{operator}' at {position}")]
    UnsupportedOperator { operator: String, position: Span },
    #[error("invalid parse tree structure: {reason} at {position}")]
    MalformedTree { reason: String, position: Span },
    #[error("invalid number literal '{lexeme}' at {position}")]
    NumberFormat { lexeme: String, position: Span },
}

/// Walks parse trees against its own symbol table. Trees are only borrowed,
/// so one tree can be evaluated again after the bindings change.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    symbols: SymbolTable,
}

impl Evaluator {
    /// An evaluator seeded with [`DEFAULT_BINDINGS`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn define_variable(&mut self, name: char, value: f64) {
        self.symbols.define(name, value);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn evaluate(&self, tree: &ParseNode) -> Result<f64, EvalError> {
        let result = self.compute(tree);
        debug!("Evaluated {} to {:?}", tree, result);
        result
    }

    fn compute(&self, node: &ParseNode) -> Result<f64, EvalError> {
        match node {
            ParseNode::Leaf(token) => self.leaf(token),
            ParseNode::BinaryOp(lhs, op, rhs) => {
                let lhs = self.compute(lhs)?;
                let rhs = self.compute(rhs)?;
                let operator =
                    Operator::try_from(op).map_err(|operator| EvalError::UnsupportedOperator {
                        operator,
                        position: op.span(),
                    })?;
                match operator {
                    Operator::Plus => Ok(lhs + rhs),
                    Operator::Minus => Ok(lhs - rhs),
                    Operator::Times => Ok(lhs * rhs),
                    // Exact zero only, no tolerance.
                    Operator::Divide if rhs == 0.0 => Err(EvalError::DivisionByZero {
                        position: node.span(),
                    }),
                    Operator::Divide => Ok(lhs / rhs),
                }
            }
        }
    }

    fn leaf(&self, token: &Token) -> Result<f64, EvalError> {
        match token.typ() {
            TokenType::IDENTIFIER => {
                let mut chars = token.lexeme().chars();
                match (chars.next(), chars.next()) {
                    (Some(name), None) => Ok(self.symbols.get(name)),
                    _ => Err(EvalError::MalformedTree {
                        reason: format!("identifier '{}' is not a single letter", token.lexeme()),
                        position: token.span(),
                    }),
                }
            }
            TokenType::NUMBER if WHOLE_NUMBER.is_match(token.lexeme()) => {
                token
                    .lexeme()
                    .parse::<f64>()
                    .map_err(|_| EvalError::NumberFormat {
                        lexeme: token.lexeme().to_string(),
                        position: token.span(),
                    })
            }
            TokenType::NUMBER => Err(EvalError::NumberFormat {
                lexeme: token.lexeme().to_string(),
                position: token.span(),
            }),
            _ => Err(EvalError::MalformedTree {
                reason: format!("leaf holds {}", token),
                position: token.span(),
            }),
        }
    }
}

#[cfg(test)]
mod test;
