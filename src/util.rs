/// Text position helpers.
///
/// The lexer works on byte offsets, while diagnostics report character
/// positions. These helpers translate between the two.
pub mod text;
