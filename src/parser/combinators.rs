use std::cell::RefCell;

use super::error::ParseError;
use super::tokenizer::{Token, TokenType};

#[derive(Debug)]
pub(super) enum ParseResult<'a, Output> {
    Ok((Output, ParserInput<'a>)),
    Err,
}

/// Shared diagnostics sink, threaded through every parser by copy.
#[derive(Debug, Clone, Copy)]
pub(super) struct ParserState<'a>(&'a RefCell<Vec<ParseError>>);

impl<'a> ParserState<'a> {
    pub(super) fn new(errors: &'a RefCell<Vec<ParseError>>) -> Self {
        Self(errors)
    }

    /// Keeps only the farthest failure: an error at or before the position of
    /// one already reported is a consequence of it and is dropped.
    pub(super) fn report_error(&self, error: ParseError) {
        let mut errors = self.0.borrow_mut();
        let superseded = errors
            .last()
            .is_some_and(|last| error.position().start <= last.position().start);
        if !superseded {
            errors.push(error);
        }
    }

    pub(super) fn has_errors(&self) -> bool {
        !self.0.borrow().is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ParserInput<'a>(&'a [Token], ParserState<'a>);

impl<'a> ParserInput<'a> {
    pub(super) fn new(input: &'a [Token], state: ParserState<'a>) -> Self {
        Self(input, state)
    }
    pub(super) fn state(&self) -> ParserState<'a> {
        self.1
    }
    /// The next unconsumed token. A well-formed stream always ends in `EOF`;
    /// an exhausted slice is reported as a synthetic end marker.
    pub(super) fn peek(&self) -> Token {
        self.0
            .first()
            .cloned()
            .unwrap_or_else(|| Token::new(TokenType::EOF, "", Default::default()))
    }
}

impl<'a, T> ParseResult<'a, T> {
    pub(super) fn or_else<O>(self, op: O) -> Self
    where
        O: FnOnce() -> Self,
    {
        match self {
            Self::Ok(inner) => Self::Ok(inner),
            Self::Err => op(),
        }
    }
    pub(super) fn map<U, F>(self, op: F) -> ParseResult<'a, U>
    where
        F: FnOnce((T, ParserInput<'a>)) -> (U, ParserInput<'a>),
    {
        match self {
            Self::Ok(inner) => ParseResult::Ok(op(inner)),
            Self::Err => ParseResult::Err,
        }
    }
    pub(super) fn and_then<U, F>(self, op: F) -> ParseResult<'a, U>
    where
        F: FnOnce((T, ParserInput<'a>)) -> ParseResult<'a, U>,
    {
        match self {
            Self::Ok(inner) => op(inner),
            Self::Err => ParseResult::Err,
        }
    }
}

pub(super) trait Parser<'a, Output> {
    fn parse(&self, input: ParserInput<'a>) -> ParseResult<'a, Output>;
    fn map<F, MappedOutput>(self, map_fn: F) -> BoxedParser<'a, MappedOutput>
    where
        Self: Sized + 'a,
        Output: 'a,
        MappedOutput: 'a,
        F: Fn(Output) -> MappedOutput + 'a,
    {
        BoxedParser::new(map(self, map_fn))
    }
    fn or(self, parser: impl Parser<'a, Output> + 'a) -> BoxedParser<'a, Output>
    where
        Self: Sized + 'a,
        Output: 'a,
    {
        let alternative =
            move |input: ParserInput<'a>| self.parse(input).or_else(|| parser.parse(input));
        BoxedParser::new(alternative)
    }
}

impl<'a, F, Output> Parser<'a, Output> for F
where
    F: Fn(ParserInput<'a>) -> ParseResult<'a, Output>,
{
    fn parse(&self, input: ParserInput<'a>) -> ParseResult<'a, Output> {
        self(input)
    }
}

pub(super) struct BoxedParser<'a, Output> {
    parser: Box<dyn Parser<'a, Output> + 'a>,
}

impl<'a, Output> BoxedParser<'a, Output> {
    fn new(parser: impl Parser<'a, Output> + 'a) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }
}

impl<'a, Output> Parser<'a, Output> for BoxedParser<'a, Output> {
    fn parse(&self, input: ParserInput<'a>) -> ParseResult<'a, Output> {
        self.parser.parse(input)
    }
}

pub(super) fn pair<'a, R1, R2>(
    parser1: impl Parser<'a, R1>,
    parser2: impl Parser<'a, R2>,
) -> impl Parser<'a, (R1, R2)> {
    move |input: ParserInput<'a>| {
        parser1.parse(input).and_then(|(result1, next_input)| {
            parser2
                .parse(next_input)
                .map(|(result2, rest)| ((result1, result2), rest))
        })
    }
}

pub(super) fn map<'a, F, A, B>(
    parser: impl Parser<'a, A>,
    map_fn: F,
) -> impl Fn(ParserInput<'a>) -> ParseResult<'a, B>
where
    F: Fn(A) -> B,
{
    move |input| {
        parser
            .parse(input)
            .map(|(result, rest)| (map_fn(result), rest))
    }
}

pub(super) fn left<'a, A, B>(
    left_parser: impl Parser<'a, A>,
    right_parser: impl Parser<'a, B>,
) -> impl Parser<'a, A> {
    map(pair(left_parser, right_parser), |(left, _right)| left)
}

pub(super) fn right<'a, A, B>(
    left_parser: impl Parser<'a, A>,
    right_parser: impl Parser<'a, B>,
) -> impl Parser<'a, B> {
    map(pair(left_parser, right_parser), |(_left, right)| right)
}

pub(super) fn zero_or_more<'a, R>(parser: impl Parser<'a, R>) -> impl Parser<'a, Vec<R>> {
    move |input: ParserInput<'a>| {
        let mut result = Vec::new();
        let mut tmp_input = input;
        while let ParseResult::Ok((next, rest)) = parser.parse(tmp_input) {
            tmp_input = rest;
            result.push(next);
        }
        ParseResult::Ok((result, tmp_input))
    }
}

pub(super) fn tok<'a>(
    expected_type: TokenType,
) -> impl Fn(ParserInput<'a>) -> ParseResult<'a, Token> {
    move |input| match input.0.first() {
        Some(token) if token.typ == expected_type => {
            ParseResult::Ok((token.clone(), ParserInput(&input.0[1..], input.1)))
        }
        _ => ParseResult::Err,
    }
}
