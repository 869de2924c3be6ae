use crate::{
    ast::{BinaryOperator, Expr},
    compiler::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// This is the entry point for expression parsing. It handles the
    /// left-associative binary operators `+` and `-`, so `a - b - c` parses as
    /// `(a - b) - c`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, or the single term if no operator follows.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.tokenizer.line();
            self.eat(self.current.kind())?;
            let right = self.parse_term()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles the left-associative operators `*` and `/`, which bind tighter
    /// than `+` and `-`.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = self.tokenizer.line();
            self.eat(self.current.kind())?;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use arithc::{
///     ast::BinaryOperator,
///     compiler::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
