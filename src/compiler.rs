/// The lexer module tokenizes one line of source text.
///
/// The tokenizer reads the raw characters of a line and produces tokens on
/// demand: numbers, string literals, the four arithmetic operators,
/// parentheses, and an end marker. This is the first stage of compilation.
///
/// # Responsibilities
/// - Skips whitespace and converts the character stream into tokens.
/// - Decides between integer and real literals from the presence of `.`.
/// - Reports invalid characters, malformed numbers, and unterminated strings
///   with their position.
pub mod lexer;
/// The parser module builds an expression tree from tokens.
///
/// The parser pulls tokens from a tokenizer one at a time and constructs an
/// `Expr` with recursive descent, honoring the usual precedence of `*` and
/// `/` over `+` and `-`.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting the expected and found tokens.
pub mod parser;
/// The render module turns an expression tree back into source text.
pub mod render;
/// The emit module wraps recompiled expressions into the generated program.
pub mod emit;
