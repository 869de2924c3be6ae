use crate::{
    ast::Expr,
    compiler::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
    error::ParseError,
};

/// Deepest supported nesting of parentheses within one line.
pub const MAX_NESTING_DEPTH: usize = 256;

impl Parser<'_> {
    /// Parses a factor, the atomic unit of the grammar.
    ///
    /// Grammar:
    /// ```text
    ///     factor := Number
    ///             | "(" expression ")"
    ///             | StringLiteral
    /// ```
    /// Grouping parentheses are consumed; the returned tree carries the
    /// grouping in its shape.
    ///
    /// # Errors
    /// - `ExpectedFactor` if the lookahead cannot start a factor, including
    ///   the end of the line.
    /// - `UnexpectedToken` if a `(` is not matched by `)`.
    /// - `NestingTooDeep` if parentheses nest beyond [`MAX_NESTING_DEPTH`].
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        let line = self.tokenizer.line();

        match &self.current {
            Token::Number(value) => {
                let value = value.clone();
                self.eat(TokenKind::Number)?;
                Ok(Expr::Number { value, line })
            },
            Token::StringLiteral(value) => {
                let value = value.clone();
                self.eat(TokenKind::StringLiteral)?;
                Ok(Expr::StringLiteral { value, line })
            },
            Token::LParen => self.parse_grouping(),
            other => Err(ParseError::ExpectedFactor { found: other.kind(),
                                                      line,
                                                      position: self.tokenizer.scan_position() }),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    line:     self.tokenizer.line(),
                                                    position: self.tokenizer.scan_position(), });
        }

        self.eat(TokenKind::LParen)?;
        self.depth += 1;
        let inner = self.parse_expression();
        self.depth -= 1;
        let inner = inner?;
        self.eat(TokenKind::RParen)?;
        Ok(inner)
    }
}
