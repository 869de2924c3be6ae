/// Lexing and parsing errors.
///
/// Defines every error that can stop the compilation of a single line:
/// characters outside the grammar, unterminated strings, malformed numbers,
/// and tokens that do not fit the expression grammar.
pub mod parse_error;
/// File handling errors.
///
/// Errors raised by the driver while reading the input, writing the generated
/// program, or compiling a line of a whole source.
pub mod driver_error;

pub use driver_error::DriverError;
pub use parse_error::{ErrorKind, ParseError};
