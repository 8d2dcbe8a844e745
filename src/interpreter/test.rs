use super::{EvalError, Evaluator, SymbolTable};
use crate::parser::{parse_str, ParseNode, Span, Token, TokenType};

fn eval_with_defaults(input: &str) -> Result<f64, EvalError> {
    let tree = parse_str(input).expect("input should parse");
    Evaluator::new().evaluate(&tree)
}

fn leaf(typ: TokenType, lexeme: &str) -> ParseNode {
    ParseNode::leaf(Token::new(typ, lexeme, Span::default()))
}

#[test]
fn test_precedence() {
    assert_eq!(eval_with_defaults("x + y * z"), Ok(31.0));
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval_with_defaults("x - y - z"), Ok(0.0));
    assert_eq!(eval_with_defaults("X / p / 2"), Ok(20.0 / 6.0 / 2.0));
}

#[test]
fn test_parentheses() {
    assert_eq!(eval_with_defaults("(x + y) * z"), Ok(51.0));
    assert_eq!(eval_with_defaults("x - (y - z)"), Ok(6.0));
}

#[test]
fn test_uppercase_defaults() {
    assert_eq!(eval_with_defaults("X + Y + Z + P"), Ok(71.0));
}

#[test]
fn test_number_literals() {
    assert_eq!(eval_with_defaults("007 + 12"), Ok(19.0));
    assert_eq!(eval_with_defaults("7 / 2"), Ok(3.5));
}

#[test]
fn test_division_by_exact_zero() {
    assert!(matches!(
        eval_with_defaults("x / (z - z)"),
        Err(EvalError::DivisionByZero { .. })
    ));
    assert!(matches!(
        eval_with_defaults("0 / 0"),
        Err(EvalError::DivisionByZero { .. })
    ));
}

#[test]
fn test_division_by_tiny_value_is_allowed() {
    let tree = parse_str("x / a").unwrap();
    let mut evaluator = Evaluator::new();
    evaluator.define_variable('a', 1e-9);
    assert_eq!(evaluator.evaluate(&tree), Ok(10.0 / 1e-9));
}

#[test]
fn test_division_by_zero_position() {
    let err = eval_with_defaults("1 + x / (z - z)").unwrap_err();
    assert_eq!(
        err,
        EvalError::DivisionByZero {
            position: Span::new(4, 14)
        }
    );
}

#[test]
fn test_undefined_variable_defaults_to_zero() {
    assert_eq!(eval_with_defaults("a + b"), Ok(0.0));
    assert_eq!(eval_with_defaults("x * q"), Ok(0.0));
}

#[test]
fn test_reevaluation_after_define() {
    let tree = parse_str("x + 1").unwrap();
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate(&tree), Ok(11.0));
    evaluator.define_variable('x', 100.0);
    assert_eq!(evaluator.evaluate(&tree), Ok(101.0));
    evaluator.define_variable('a', 2.5);
    assert_eq!(evaluator.symbols().get('a'), 2.5);
}

#[test]
fn test_evaluators_do_not_share_bindings() {
    let tree = parse_str("y").unwrap();
    let mut first = Evaluator::new();
    let second = Evaluator::new();
    first.define_variable('y', -1.0);
    assert_eq!(first.evaluate(&tree), Ok(-1.0));
    assert_eq!(second.evaluate(&tree), Ok(7.0));
}

#[test]
fn test_custom_symbol_table() {
    let mut symbols = SymbolTable::empty();
    symbols.define('k', 4.0);
    let evaluator = Evaluator::with_symbols(symbols);
    assert_eq!(evaluator.evaluate(&parse_str("k * x").unwrap()), Ok(0.0));
    assert_eq!(evaluator.evaluate(&parse_str("k * k").unwrap()), Ok(16.0));
}

#[test]
fn test_unsupported_operator() {
    let tree = ParseNode::binary(
        leaf(TokenType::NUMBER, "1"),
        Token::new(TokenType::LPAREN, "(", Span::new(2, 3)),
        leaf(TokenType::NUMBER, "2"),
    );
    assert_eq!(
        Evaluator::new().evaluate(&tree),
        Err(EvalError::UnsupportedOperator {
            operator: "(".to_string(),
            position: Span::new(2, 3)
        })
    );
}

#[test]
fn test_malformed_leaf() {
    let tree = ParseNode::binary(
        leaf(TokenType::PLUS, "+"),
        Token::new(TokenType::PLUS, "+", Span::default()),
        leaf(TokenType::NUMBER, "2"),
    );
    assert!(matches!(
        Evaluator::new().evaluate(&tree),
        Err(EvalError::MalformedTree { .. })
    ));
    assert!(matches!(
        Evaluator::new().evaluate(&leaf(TokenType::IDENTIFIER, "xy")),
        Err(EvalError::MalformedTree { .. })
    ));
}

#[test]
fn test_bad_number_literal() {
    assert!(matches!(
        Evaluator::new().evaluate(&leaf(TokenType::NUMBER, "1.5")),
        Err(EvalError::NumberFormat { .. })
    ));
}
