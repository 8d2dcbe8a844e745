use super::error::LexError;
use super::locations::Span;
use const_format::concatcp;
use derivative::Derivative;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Equality ignores the span: two tokens are the same if they have the same
/// kind and text, wherever they were found.
#[derive(Clone, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Token {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: String,
    #[derivative(PartialEq = "ignore")]
    pub(crate) span: Span,
}

impl Token {
    pub fn new(typ: TokenType, lexeme: &str, span: Span) -> Self {
        Self {
            typ,
            lexeme: lexeme.to_string(),
            span,
        }
    }
    pub fn typ(&self) -> TokenType {
        self.typ
    }
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.typ, self.lexeme)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenType {
    NUMBER,
    IDENTIFIER,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    LPAREN,
    RPAREN,
    EOF,
}

const PLUS: (&str, TokenType) = ("+", TokenType::PLUS);
const MINUS: (&str, TokenType) = ("-", TokenType::MINUS);
const STAR: (&str, TokenType) = ("*", TokenType::STAR);
const SLASH: (&str, TokenType) = ("/", TokenType::SLASH);
const LPAREN: (&str, TokenType) = ("(", TokenType::LPAREN);
const RPAREN: (&str, TokenType) = (")", TokenType::RPAREN);

const SIMPLE_TOKENS: [(&str, TokenType); 6] = [PLUS, MINUS, STAR, SLASH, LPAREN, RPAREN];

const S_WHITESPACE: &str = r"[ \f\t\r\n]+";
// One letter only: `xy` is two adjacent identifiers.
const S_IDENTIFIER: &str = r"[a-zA-Z]";
const S_NUMBER: &str = r"[0-9]+";

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(concatcp!("^", S_WHITESPACE)).expect("Error compiling regex."));
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(concatcp!("^", S_IDENTIFIER)).expect("Error compiling regex."));
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(concatcp!("^", S_NUMBER)).expect("Error compiling regex."));
pub(crate) static WHOLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(concatcp!("^", S_NUMBER, "$")).expect("Error compiling regex."));

/// Lazily scans a source string. Yields tokens up to and including a single
/// `EOF`, then `None`. After an error the lexer is exhausted until `reset`.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    start: usize,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            done: false,
        }
    }

    /// Rewinds to the beginning of the source.
    pub fn reset(&mut self) {
        self.start = 0;
        self.done = false;
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let source = self.source;
        if let Some(m) = WHITESPACE.find(&source[self.start..]) {
            self.start += m.end();
        }
        let rest = &source[self.start..];
        if rest.is_empty() {
            self.done = true;
            return Ok(Token::new(TokenType::EOF, "", Span::at(self.start)));
        }
        if let Some(token) = self.find_by_regex(&NUMBER, TokenType::NUMBER) {
            return Ok(token);
        }
        if let Some(token) = self.find_by_regex(&IDENTIFIER, TokenType::IDENTIFIER) {
            return Ok(token);
        }
        for (lexeme, tok_type) in SIMPLE_TOKENS {
            if rest.starts_with(lexeme) {
                return Ok(self.push(tok_type, lexeme.len()));
            }
        }
        self.done = true;
        // `rest` is non-empty here.
        let character = rest.chars().next().unwrap_or_default();
        Err(LexError::UnexpectedCharacter {
            character,
            position: Span::new(self.start, self.start + character.len_utf8()),
        })
    }

    fn find_by_regex(&mut self, regex: &Regex, token_type: TokenType) -> Option<Token> {
        let source = self.source;
        regex
            .find(&source[self.start..])
            .map(|m| self.push(token_type, m.end()))
    }

    fn push(&mut self, typ: TokenType, len: usize) -> Token {
        let end = self.start + len;
        let token = Token::new(typ, &self.source[self.start..end], Span::new(self.start, end));
        self.start = end;
        token
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        Some(self.next_token())
    }
}

/// Runs one full pass over `source`. No partial stream is returned on error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    debug!("Lexed tokens: {:?}", tokens);
    Ok(tokens)
}

/// One line per token (the end marker is left out): text, then kind.
pub fn token_listing(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| t.typ != TokenType::EOF)
        .map(|t| format!("{:<10} {:<20}\n", t.lexeme, format!("{:?}", t.typ)))
        .collect()
}
