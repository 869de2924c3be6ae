use std::{io, path::PathBuf};

use crate::error::ParseError;

#[derive(Debug)]
/// Represents all errors that can occur while compiling a whole file.
pub enum DriverError {
    /// A line failed to compile.
    Compile(ParseError),
    /// Reading the input or writing the output failed.
    Io {
        /// The file being read or written.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl DriverError {
    /// Wraps an I/O error together with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(),
                   source }
    }
}

impl From<ParseError> for DriverError {
    fn from(value: ParseError) -> Self {
        Self::Compile(value)
    }
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile(err) => write!(f, "{err}"),

            Self::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                write!(f, "File '{}' was not found.", path.display())
            },

            Self::Io { path, source } => {
                write!(f, "Failed to access '{}': {source}", path.display())
            },
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compile(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}
