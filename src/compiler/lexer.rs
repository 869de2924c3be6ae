use std::fmt;

use logos::Logos;
use num_bigint::BigUint;

use crate::{
    ast::Number,
    compiler::parser::core::ParseResult,
    error::ParseError,
    util::text::char_position,
};

/// Represents a lexical token of one expression line.
/// A token is a minimal but meaningful unit of text produced by the
/// [`Tokenizer`].
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    Number(Number),
    /// String literal tokens; holds the text between the quotes verbatim.
    StringLiteral(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of the line.
    End,
}

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// # Example
    /// ```
    /// use arithc::{
    ///     ast::Number,
    ///     compiler::lexer::{Token, TokenKind},
    /// };
    ///
    /// assert_eq!(Token::Number(Number::from(7_u64)).kind(), TokenKind::Number);
    /// assert_eq!(Token::End.kind(), TokenKind::End);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::StringLiteral(_) => TokenKind::StringLiteral,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::End => TokenKind::End,
        }
    }
}

/// The kind of a [`Token`], without its payload.
///
/// Used by the parser to state which token it requires, and by diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal.
    Number,
    /// A string literal.
    StringLiteral,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of the line.
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::StringLiteral => "string literal",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::End => "end of line",
        };
        f.write_str(name)
    }
}

/// Failure reported by the generated scanner for a single lexeme.
///
/// `InvalidCharacter` is the default, which is what the scanner reports for
/// input that matches no pattern at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No pattern matches the character.
    #[default]
    InvalidCharacter,
    /// A string literal reached the end of the line without a closing quote.
    UnterminatedString,
    /// A run of digits and dots that does not convert to a number.
    InvalidNumber,
}

/// Raw lexemes recognized by the generated scanner.
///
/// Whitespace is skipped here; the [`Tokenizer`] maps every remaining lexeme
/// onto a [`Token`] and supplies `End` itself.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
enum Lexeme {
    /// A maximal run of digits and decimal points.
    #[regex(r"[0-9.]+", parse_number)]
    Number(Number),
    /// A string literal. The closing quote is optional in the pattern so that
    /// an unterminated literal is reported as such and not as a bad `"`.
    #[regex(r#""[^"]*"?"#, parse_string, allow_greedy = true)]
    StringLiteral(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and any other Unicode whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Lexeme {
    fn into_token(self) -> Token {
        match self {
            Self::Number(number) => Token::Number(number),
            Self::StringLiteral(text) => Token::StringLiteral(text),
            Self::Plus => Token::Plus,
            Self::Minus => Token::Minus,
            Self::Star => Token::Star,
            Self::Slash => Token::Slash,
            Self::LParen => Token::LParen,
            Self::RParen => Token::RParen,
            Self::Ignored => unreachable!("whitespace is skipped by the scanner"),
        }
    }
}

/// Parses a numeric literal from the current lexeme.
///
/// A literal containing `.` becomes a [`Number::Real`], anything else a
/// [`Number::Integer`] of unbounded size.
///
/// # Returns
/// - `Ok(Number)`: The converted literal.
/// - `Err(LexErrorKind::InvalidNumber)`: If the run has more than one `.`, is
///   a lone `.`, or is a real too large for a finite `f64`.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Result<Number, LexErrorKind> {
    let slice = lex.slice();
    if slice.contains('.') {
        slice.parse::<f64>()
             .ok()
             .filter(|value| value.is_finite())
             .map(Number::Real)
             .ok_or(LexErrorKind::InvalidNumber)
    } else {
        slice.parse::<BigUint>()
             .map(Number::Integer)
             .map_err(|_| LexErrorKind::InvalidNumber)
    }
}

/// Extracts the body of a string literal from the current lexeme.
///
/// # Returns
/// - `Ok(String)`: The text between the quotes, with no escape processing.
/// - `Err(LexErrorKind::UnterminatedString)`: If the line ended before the
///   closing quote.
fn parse_string(lex: &logos::Lexer<Lexeme>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    if slice.len() >= 2 && slice.ends_with('"') {
        Ok(slice[1..slice.len() - 1].to_string())
    } else {
        Err(LexErrorKind::UnterminatedString)
    }
}

/// Converts one line of text into tokens on demand.
///
/// The tokenizer only moves forward. Once the line is exhausted every call to
/// [`Tokenizer::next_token`] returns [`Token::End`].
///
/// # Example
/// ```
/// use arithc::{
///     ast::Number,
///     compiler::lexer::{Token, Tokenizer},
/// };
///
/// let mut tokenizer = Tokenizer::new("2 * \"ab\"", 1);
/// assert_eq!(tokenizer.next_token().unwrap(), Token::Number(Number::from(2_u64)));
/// assert_eq!(tokenizer.next_token().unwrap(), Token::Star);
/// assert_eq!(tokenizer.next_token().unwrap(), Token::StringLiteral("ab".to_string()));
/// assert_eq!(tokenizer.next_token().unwrap(), Token::End);
/// assert_eq!(tokenizer.next_token().unwrap(), Token::End);
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Lexeme>,
    line:     usize,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`, reporting errors on `line`.
    #[must_use]
    pub fn new(source: &'src str, line: usize) -> Self {
        Self { lexer: Lexeme::lexer(source),
               line,
               finished: false }
    }

    /// Returns the line number this tokenizer reports.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the current scan position as a character offset.
    ///
    /// This is the position just past the most recently scanned token, or the
    /// length of the line once the end has been reached.
    #[must_use]
    pub fn scan_position(&self) -> usize {
        let source = self.lexer.source();
        if self.finished {
            source.chars().count()
        } else {
            char_position(source, self.lexer.span().end)
        }
    }

    /// Returns the next token of the line.
    ///
    /// # Errors
    /// - `InvalidCharacter` at the position of a character outside the
    ///   grammar.
    /// - `UnterminatedString` at the end of the line if a string literal is
    ///   not closed.
    /// - `InvalidNumber` just past a malformed numeric literal.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if self.finished {
            return Ok(Token::End);
        }

        match self.lexer.next() {
            Some(Ok(lexeme)) => {
                let token = lexeme.into_token();
                tracing::trace!(line = self.line, position = self.scan_position(), ?token, "scanned token");
                Ok(token)
            },
            Some(Err(kind)) => Err(self.error(&kind)),
            None => {
                self.finished = true;
                Ok(Token::End)
            },
        }
    }

    /// Builds the positioned error for a failed lexeme.
    fn error(&self, kind: &LexErrorKind) -> ParseError {
        let source = self.lexer.source();
        let span = self.lexer.span();
        let line = self.line;

        match kind {
            LexErrorKind::InvalidCharacter => {
                ParseError::InvalidCharacter { character: self.lexer
                                                              .slice()
                                                              .chars()
                                                              .next()
                                                              .unwrap_or_default(),
                                               line,
                                               position: char_position(source, span.start) }
            },
            LexErrorKind::UnterminatedString => {
                ParseError::UnterminatedString { line,
                                                 position: char_position(source, span.end) }
            },
            LexErrorKind::InvalidNumber => {
                ParseError::InvalidNumber { literal: self.lexer.slice().to_string(),
                                            line,
                                            position: char_position(source, span.end) }
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = ParseResult<Token>;

    /// Yields every token before the end of the line.
    ///
    /// Iteration stops after `End` or after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Token::End) => None,
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
            ok => Some(ok),
        }
    }
}
