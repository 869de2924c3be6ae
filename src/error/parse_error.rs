use crate::compiler::lexer::TokenKind;

/// The broad category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that cannot start any token.
    InvalidCharacter,
    /// A string literal without a closing quote.
    UnterminatedString,
    /// A run of digits and dots that is not a representable number.
    InvalidNumber,
    /// A token that does not fit the grammar at its position.
    Syntax,
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while lexing or parsing a line.
///
/// Positions are 0-based character offsets into the line; lines are 1-based.
pub enum ParseError {
    /// A character outside the accepted grammar.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// Position of the offending character.
        position:  usize,
    },
    /// The line ended before a string literal was closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line:     usize,
        /// Position at which scanning stopped.
        position: usize,
    },
    /// A numeric literal that could not be converted.
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// The source line where the error occurred.
        line:     usize,
        /// Position just past the literal.
        position: usize,
    },
    /// A specific token was required but another one was found.
    UnexpectedToken {
        /// The token kind the parser required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// Current scan position.
        position: usize,
    },
    /// A number, string, or `(` was required but another token was found.
    ExpectedFactor {
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// Current scan position.
        position: usize,
    },
    /// Parentheses were nested beyond the supported depth.
    NestingTooDeep {
        /// The maximum supported depth.
        limit:    usize,
        /// The source line where the error occurred.
        line:     usize,
        /// Current scan position.
        position: usize,
    },
}

impl ParseError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use arithc::{error::ErrorKind, recompile_line};
    ///
    /// let err = recompile_line("(3 + 4", 1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::UnterminatedString { .. } => ErrorKind::UnterminatedString,
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::UnexpectedToken { .. }
            | Self::ExpectedFactor { .. }
            | Self::NestingTooDeep { .. } => ErrorKind::Syntax,
        }
    }

    /// Returns the 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedFactor { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Returns the 0-based character position of the error within its line.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::UnterminatedString { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::ExpectedFactor { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     line,
                                     position, } => write!(f,
                                                            "Error on line {line}: Invalid character {character:?} at position {position}."),

            Self::UnterminatedString { line, position } => write!(f,
                                                                  "Error on line {line}: String literal is not closed (scanning stopped at position {position})."),

            Self::InvalidNumber { literal,
                                  line,
                                  position, } => write!(f,
                                                         "Error on line {line}: Invalid number '{literal}' ending at position {position}."),

            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    position, } => write!(f,
                                                           "Error on line {line}: Syntax error at position {position}: expected {expected}, found {found}."),

            Self::ExpectedFactor { found, line, position } => write!(f,
                                                                     "Error on line {line}: Syntax error at position {position}: expected a number, a string or '(', found {found}."),

            Self::NestingTooDeep { limit, line, position } => write!(f,
                                                                     "Error on line {line}: Parentheses nested deeper than {limit} levels at position {position}."),
        }
    }
}

impl std::error::Error for ParseError {}
