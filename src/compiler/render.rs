use std::fmt::Write;

use crate::ast::Expr;

/// Renders an expression tree back into source text.
///
/// Numbers keep their integer or real form, string literals are re-quoted
/// verbatim, and operators are written as `<left> <op> <right>`.
///
/// Parentheses are emitted only where the tree needs them: around a child
/// whose operator binds looser than its parent, and around a right child of
/// equal precedence. Reparsing the output therefore yields the same tree.
///
/// # Example
/// ```
/// use arithc::{
///     ast::{BinaryOperator, Expr, Number},
///     compiler::render::render,
/// };
///
/// let number = |n: u64| Expr::Number { value: Number::from(n),
///                                      line:  1, };
/// // 3 - (4 - 5)
/// let expr = Expr::BinaryOp { left:  Box::new(number(3)),
///                             op:    BinaryOperator::Sub,
///                             right: Box::new(Expr::BinaryOp { left:  Box::new(number(4)),
///                                                              op:    BinaryOperator::Sub,
///                                                              right: Box::new(number(5)),
///                                                              line:  1, }),
///                             line:  1, };
/// assert_eq!(render(&expr), "3 - (4 - 5)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Writes `expr`, walking its left spine in a loop.
///
/// Left operands that need no parentheses continue the spine, so a flat
/// chain of any length is written without recursion. Recursion only happens
/// for parenthesized operands, whose depth the parser bounds.
fn write_expr(out: &mut String, expr: &Expr) {
    let mut spine = Vec::new();
    let mut leftmost = expr;

    while let Expr::BinaryOp { left, op, right, .. } = leftmost {
        spine.push((*op, right.as_ref()));
        leftmost = left.as_ref();
        if leftmost.precedence() < op.precedence() {
            break;
        }
    }

    match leftmost {
        Expr::Number { value, .. } => {
            let _ = write!(out, "{value}");
        },
        Expr::StringLiteral { value, .. } => {
            out.push('"');
            out.push_str(value);
            out.push('"');
        },
        Expr::BinaryOp { .. } => write_grouped(out, leftmost),
    }

    for (op, right) in spine.into_iter().rev() {
        let _ = write!(out, " {op} ");
        if right.precedence() <= op.precedence() {
            write_grouped(out, right);
        } else {
            write_expr(out, right);
        }
    }
}

fn write_grouped(out: &mut String, operand: &Expr) {
    out.push('(');
    write_expr(out, operand);
    out.push(')');
}
