use std::fmt;

use num_bigint::BigUint;

/// A numeric literal as it was scanned.
///
/// Whether a literal is an integer or a real is decided by the lexer from the
/// presence of a decimal point, and is carried unchanged into the recompiled
/// text. Integers have no size limit, matching the generated program's
/// arbitrary-precision integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An unsigned integer literal of any size, such as `42`.
    Integer(BigUint),
    /// A 64-bit floating-point literal, such as `3.14`, `.5` or `2.`.
    Real(f64),
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Integer(BigUint::from(value))
    }
}

impl From<BigUint> for Number {
    fn from(value: BigUint) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for Number {
    /// Formats the literal so that it reads back as the same kind of number.
    ///
    /// Integers are written in plain decimal without leading zeros. Reals
    /// always keep a decimal point or an exponent (`3.0`, `0.5`, `1e20`), so a
    /// real never turns into an integer in the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value:?}"),
        }
    }
}

/// An abstract syntax tree (AST) node for one arithmetic expression.
///
/// The tree mirrors the grammar: literals are leaves and every operator
/// application is a `BinaryOp`. Grouping parentheses do not appear in the
/// tree; they are implied by its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The scanned value.
        value: Number,
        /// Line number in the source.
        line:  usize,
    },
    /// A double-quoted string literal.
    StringLiteral {
        /// The text between the quotes, verbatim.
        value: String,
        /// Line number in the source.
        line:  usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source.
        line:  usize,
    },
}

impl Expr {
    /// Returns the source line this expression came from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }

    /// Returns the binding strength of the expression's top-level operator.
    ///
    /// Literals bind tighter than any operator.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::Number { .. } | Self::StringLiteral { .. } => u8::MAX,
        }
    }
}

impl Drop for Expr {
    /// Drops the tree without recursion.
    ///
    /// A flat chain such as `1 + 1 + ... + 1` parses into a left-deep tree as
    /// deep as the chain is long, which would overflow the stack if dropped
    /// node by node.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_operands(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_operands(&mut expr, &mut pending);
        }
    }
}

/// Moves the operands of a binary operation onto `pending`, leaving leaves in
/// their place.
fn detach_operands(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::BinaryOp { left, right, .. } = expr {
        for operand in [left, right] {
            if matches!(**operand, Expr::BinaryOp { .. }) {
                pending.push(std::mem::replace(&mut **operand,
                                               Expr::Number { value: Number::Real(0.0),
                                                              line:  0, }));
            }
        }
    }
}

/// Binary operators supported by the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the operator's precedence; higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use arithc::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Sub.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the symbol used for the operator in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
