use crate::{
    ast::Expr,
    compiler::{
        lexer::{Token, TokenKind, Tokenizer},
        render::render,
    },
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a single line.
///
/// The parser owns its tokenizer and keeps exactly one token of lookahead.
/// Tokens are consumed in the order they are produced and never pushed back.
pub struct Parser<'src> {
    pub(in crate::compiler::parser) tokenizer: Tokenizer<'src>,
    pub(in crate::compiler::parser) current:   Token,
    pub(in crate::compiler::parser) depth:     usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and pulls the first token as lookahead.
    ///
    /// # Errors
    /// Propagates any tokenizer error raised while scanning the first token.
    pub fn new(mut tokenizer: Tokenizer<'src>) -> ParseResult<Self> {
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer,
                  current,
                  depth: 0 })
    }

    /// Consumes the lookahead token if it has the expected kind.
    ///
    /// On success the consumed token is returned and the next token becomes
    /// the lookahead.
    ///
    /// # Errors
    /// - `UnexpectedToken` naming the expected kind, the kind found, and the
    ///   current scan position.
    /// - Propagates tokenizer errors raised while scanning the next token.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let found = self.current.kind();
        if found != expected {
            return Err(ParseError::UnexpectedToken { expected,
                                                     found,
                                                     line: self.tokenizer.line(),
                                                     position: self.tokenizer.scan_position() });
        }

        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Parses a complete line: one expression followed by the end of input.
    ///
    /// Grammar: `line := expression End`
    ///
    /// # Errors
    /// Returns a `ParseError` if the expression is malformed or tokens remain
    /// after it.
    pub fn parse_line(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        self.eat(TokenKind::End)?;
        Ok(expr)
    }

    /// Parses the line and renders it back into source text.
    ///
    /// # Errors
    /// Returns a `ParseError` if the line does not parse.
    ///
    /// # Example
    /// ```
    /// use arithc::compiler::{lexer::Tokenizer, parser::core::Parser};
    ///
    /// let parser = Parser::new(Tokenizer::new("10 / 2 / 5", 1)).unwrap();
    /// assert_eq!(parser.recompile().unwrap(), "10 / 2 / 5");
    /// ```
    pub fn recompile(mut self) -> ParseResult<String> {
        let expr = self.parse_line()?;
        let rendered = render(&expr);
        tracing::debug!(line = self.tokenizer.line(), output = %rendered, "recompiled line");
        Ok(rendered)
    }
}
