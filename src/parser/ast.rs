use std::fmt::Write;

use super::tokenizer::{Token, TokenType as TT};

/// A node of the parse tree. Precedence and associativity are encoded by the
/// shape alone: a `BinaryOp` always has an operand, an operator token and an
/// operand, in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode {
    Leaf(Token),
    BinaryOp(Box<ParseNode>, Token, Box<ParseNode>),
}

impl ParseNode {
    pub fn leaf(token: Token) -> Self {
        Self::Leaf(token)
    }

    pub fn binary(lhs: ParseNode, operator: Token, rhs: ParseNode) -> Self {
        Self::BinaryOp(Box::new(lhs), operator, Box::new(rhs))
    }

    /// Indented pre-order dump, one node per line.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(0, &mut out);
        out
    }

    fn write_tree(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Leaf(token) => {
                let kind = match token.typ {
                    TT::NUMBER => "Number",
                    TT::IDENTIFIER => "Identifier",
                    _ => "Token",
                };
                let _ = writeln!(out, "{indent}{kind} '{}'", token.lexeme);
            }
            Self::BinaryOp(lhs, op, rhs) => {
                let _ = writeln!(out, "{indent}BinaryOp '{}'", op.lexeme);
                lhs.write_tree(depth + 1, out);
                rhs.write_tree(depth + 1, out);
            }
        }
    }
}

/// One-line pre-order rendering: `(+ x (* y z))`.
impl std::fmt::Display for ParseNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(token) => write!(f, "{}", token.lexeme),
            Self::BinaryOp(lhs, op, rhs) => write!(f, "({} {} {})", op.lexeme, lhs, rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl TryFrom<&Token> for Operator {
    type Error = String;

    /// Fails with the offending lexeme.
    fn try_from(value: &Token) -> Result<Self, Self::Error> {
        match value.typ {
            TT::PLUS => Ok(Self::Plus),
            TT::MINUS => Ok(Self::Minus),
            TT::STAR => Ok(Self::Times),
            TT::SLASH => Ok(Self::Divide),
            _ => Err(value.lexeme.clone()),
        }
    }
}
