//! # arithc
//!
//! arithc is a small compiler for line-oriented arithmetic expressions.
//! Every input line is tokenized, parsed into an expression tree, and
//! rendered back to text; the recompiled lines are then emitted as a Python
//! program that evaluates all of them and prints the results as one list.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    compiler::{lexer::Tokenizer, parser::core::Parser},
    error::ParseError,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum together with the numeric literal and
/// operator types. The parser builds an `Expr` tree for every line, and the
/// renderer turns it back into text.
pub mod ast;
/// The front end that turns one line of text into a recompiled expression.
///
/// # Responsibilities
/// - Tokenizes a line lazily (`lexer`).
/// - Parses tokens into an expression tree with recursive descent (`parser`).
/// - Renders the tree back into source text (`render`).
/// - Wraps recompiled lines into the generated program (`emit`).
pub mod compiler;
/// Compiles whole sources and files line by line.
///
/// The driver owns everything around the front end: splitting input into
/// lines, choosing sequential or parallel compilation, applying the error
/// policy, and reading and writing files.
pub mod driver;
/// Provides unified error types for lexing, parsing, and file handling.
///
/// Every error raised while compiling a line carries the line number and the
/// character position at which scanning stopped, so callers can point users at
/// the offending input.
pub mod error;
/// Small helpers shared by the lexer and the renderer.
pub mod util;

/// Recompiles a single line of arithmetic expression text.
///
/// A fresh tokenizer and parser are created for the line. The whole line must
/// form exactly one expression; anything left over after it is a syntax error.
///
/// # Errors
/// Returns a [`ParseError`] if the line contains an invalid character, an
/// unterminated string literal, a malformed number, or does not match the
/// expression grammar.
///
/// # Examples
/// ```
/// use arithc::recompile_line;
///
/// assert_eq!(recompile_line("3 + 4 * 2", 1).unwrap(), "3 + 4 * 2");
/// assert_eq!(recompile_line("((3 + 4)) * 2", 1).unwrap(), "(3 + 4) * 2");
///
/// // An empty line has no factor to parse.
/// assert!(recompile_line("", 1).is_err());
/// ```
pub fn recompile_line(text: &str, line: usize) -> Result<String, ParseError> {
    let tokenizer = Tokenizer::new(text, line);
    Parser::new(tokenizer)?.recompile()
}
