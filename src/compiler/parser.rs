/// Parser state and entry points.
///
/// Holds the `Parser` struct with its single token of lookahead, the `eat`
/// primitive, and the line-level entry points.
pub mod core;

/// Binary operator parsing.
///
/// Implements the `expression` and `term` grammar levels: left-associative
/// chains of `+`/`-` and `*`/`/`.
pub mod binary;

/// Factor parsing.
///
/// Handles the atomic units of the grammar: numbers, string literals, and
/// parenthesized sub-expressions.
pub mod primary;
