use super::ast::ParseNode;
use super::tokenizer::Token;

/// Byte range `start..end` into the source string.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offset {}..{}", self.start, self.end)
    }
}

pub trait Locatable {
    fn span(&self) -> Span;
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span, used for the end marker.
    pub fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn till<R: Locatable>(&self, other: &R) -> Self {
        Self {
            start: self.start,
            end: other.span().end,
        }
    }
}

impl Locatable for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl Locatable for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl<R> Locatable for Box<R>
where
    R: Locatable,
{
    fn span(&self) -> Span {
        (**self).span()
    }
}

impl Locatable for ParseNode {
    fn span(&self) -> Span {
        match self {
            Self::Leaf(token) => token.span(),
            Self::BinaryOp(lhs, _, rhs) => lhs.span().till(rhs),
        }
    }
}
