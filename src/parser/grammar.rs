// # ========================= START OF THE GRAMMAR =========================
//
// # All binary operators are left-associative. Each level parses one unit of
// # the next-higher level, then folds `(operator unit)*` onto it from the left,
// # so `a - b - c` is `(a - b) - c`.
//
// expression: expr ENDMARKER
// expr:       term (('+' | '-') term)*
// term:       factor (('*' | '/') factor)*
// factor:     NUMBER | IDENTIFIER | '(' expr ')'

use std::cell::RefCell;

use log::debug;

use super::ast::ParseNode;
use super::combinators::*;
use super::error::ParseError;
use super::tokenizer::{Token, TokenType as TT};

/// Result of a recovering parse. `tree` may be present even when
/// `diagnostics` is not empty; such a tree must not be trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub tree: Option<ParseNode>,
    pub diagnostics: Vec<ParseError>,
}

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        self.tree.is_some() && self.diagnostics.is_empty()
    }

    /// Treats any diagnostic as a hard failure and reports the first one.
    pub fn into_result(self) -> Result<ParseNode, ParseError> {
        match (self.tree, self.diagnostics.into_iter().next()) {
            (Some(tree), None) => Ok(tree),
            (_, Some(error)) => Err(error),
            // Every failing rule reports before giving up.
            (None, None) => unreachable!("parse failed without a diagnostic"),
        }
    }
}

/// Parses a complete token stream, collecting syntax errors instead of
/// stopping at the first one.
pub fn parse_with_diagnostics(tokens: &[Token]) -> ParseOutcome {
    let errors = RefCell::new(vec![]);
    let input = ParserInput::new(tokens, ParserState::new(&errors));
    let tree = match expression.parse(input) {
        ParseResult::Ok((tree, _)) => Some(tree),
        ParseResult::Err => None,
    };
    let diagnostics = errors.into_inner();
    if !diagnostics.is_empty() {
        debug!("Parse diagnostics: {:?}", diagnostics);
    }
    ParseOutcome { tree, diagnostics }
}

/// Parses a complete token stream; no tree is produced for malformed input.
pub fn parse(tokens: &[Token]) -> Result<ParseNode, ParseError> {
    parse_with_diagnostics(tokens).into_result()
}

// expression: expr ENDMARKER
fn expression(input: ParserInput) -> ParseResult<ParseNode> {
    left(expr, end_of_input).parse(input)
}

fn end_of_input(input: ParserInput) -> ParseResult<()> {
    tok(TT::EOF).map(|_| ()).or(trailing_tokens).parse(input)
}

// expr: term (('+' | '-') term)*
fn expr(input: ParserInput) -> ParseResult<ParseNode> {
    pair(term, zero_or_more(pair(additive_operator, term)))
        .map(fold_left)
        .parse(input)
}

fn additive_operator(input: ParserInput) -> ParseResult<Token> {
    tok(TT::PLUS).or(tok(TT::MINUS)).parse(input)
}

// term: factor (('*' | '/') factor)*
fn term(input: ParserInput) -> ParseResult<ParseNode> {
    pair(factor, zero_or_more(pair(multiplicative_operator, factor)))
        .map(fold_left)
        .parse(input)
}

fn multiplicative_operator(input: ParserInput) -> ParseResult<Token> {
    tok(TT::STAR).or(tok(TT::SLASH)).parse(input)
}

// factor: NUMBER | IDENTIFIER | '(' expr ')'
fn factor(input: ParserInput) -> ParseResult<ParseNode> {
    tok(TT::NUMBER)
        .or(tok(TT::IDENTIFIER))
        .map(ParseNode::Leaf)
        .or(group)
        .or(missing_operand)
        .parse(input)
}

// group: '(' expr ')'
fn group(input: ParserInput) -> ParseResult<ParseNode> {
    right(tok(TT::LPAREN), left(expr, closing_paren)).parse(input)
}

fn closing_paren(input: ParserInput) -> ParseResult<()> {
    tok(TT::RPAREN)
        .map(|_| ())
        .or(missing_closing_paren)
        .parse(input)
}

fn fold_left((first, rest): (ParseNode, Vec<(Token, ParseNode)>)) -> ParseNode {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| ParseNode::binary(lhs, op, rhs))
}

// # Error reporting
// # ---------------

fn missing_operand(input: ParserInput) -> ParseResult<ParseNode> {
    let found = input.peek();
    input.state().report_error(ParseError::ExpectedOperand {
        found: found.lexeme,
        position: found.span,
    });
    ParseResult::Err
}

// Recovers as if the ')' had been there.
fn missing_closing_paren(input: ParserInput) -> ParseResult<()> {
    let found = input.peek();
    input.state().report_error(ParseError::ExpectedClosingParen {
        found: found.lexeme,
        position: found.span,
    });
    ParseResult::Ok(((), input))
}

// Only reported when the expression itself parsed cleanly; otherwise the
// leftover tokens are a consequence of the earlier error.
fn trailing_tokens(input: ParserInput) -> ParseResult<()> {
    let found = input.peek();
    if found.typ != TT::EOF && !input.state().has_errors() {
        input.state().report_error(ParseError::TrailingTokens {
            found: found.lexeme,
            position: found.span,
        });
    }
    ParseResult::Ok(((), input))
}
