//! Helpers shared by the integration tests.
//!
//! The evaluator follows the semantics of the generated Python program, so
//! tests can check that recompiled text means the same as its source.

#![allow(dead_code)]

use arithc::{
    ast::{BinaryOperator, Expr, Number},
    compiler::{lexer::Tokenizer, parser::core::Parser},
    error::ParseError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    DivisionByZero,
    Overflow,
    TypeMismatch,
}

pub fn parse(text: &str) -> Result<Expr, ParseError> {
    Parser::new(Tokenizer::new(text, 1))?.parse_line()
}

pub fn parse_ok(text: &str) -> Expr {
    parse(text).unwrap_or_else(|e| panic!("failed to parse {text:?}: {e}"))
}

pub fn eval_line(text: &str) -> Result<Value, EvalError> {
    evaluate(&parse_ok(text))
}

pub fn evaluate(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Number { value: Number::Integer(n), .. } => {
            i64::try_from(n).map(Value::Int).map_err(|_| EvalError::Overflow)
        },
        Expr::Number { value: Number::Real(x), .. } => Ok(Value::Float(*x)),
        Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
        Expr::BinaryOp { left, op, right, .. } => {
            apply(*op, evaluate(left)?, evaluate(right)?)
        },
    }
}

#[allow(clippy::cast_precision_loss)]
fn apply(op: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Float, Int, Str};

    match (op, left, right) {
        (Add, Int(a), Int(b)) => a.checked_add(b).map(Int).ok_or(EvalError::Overflow),
        (Sub, Int(a), Int(b)) => a.checked_sub(b).map(Int).ok_or(EvalError::Overflow),
        (Mul, Int(a), Int(b)) => a.checked_mul(b).map(Int).ok_or(EvalError::Overflow),
        (Div, Int(_), Int(0)) => Err(EvalError::DivisionByZero),
        (Div, Int(a), Int(b)) => Ok(Float(a as f64 / b as f64)),

        (Add, Str(a), Str(b)) => Ok(Str(a + &b)),
        (Mul, Str(s), Int(n)) | (Mul, Int(n), Str(s)) => {
            Ok(Str(s.repeat(usize::try_from(n).unwrap_or(0))))
        },
        (_, Str(_), _) | (_, _, Str(_)) => Err(EvalError::TypeMismatch),

        (op, a, b) => {
            let (a, b) = (as_float(&a), as_float(&b));
            match op {
                Add => Ok(Float(a + b)),
                Sub => Ok(Float(a - b)),
                Mul => Ok(Float(a * b)),
                Div if b == 0.0 => Err(EvalError::DivisionByZero),
                Div => Ok(Float(a / b)),
            }
        },
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_float(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(x) => *x,
        Value::Str(_) => f64::NAN,
    }
}
