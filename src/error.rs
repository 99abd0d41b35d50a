//! Error type shared by the loader, validation, and the command line.

use std::{error, fmt, io};

use crate::validation::ValidationError;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal error.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of fatal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of positional arguments or a bad option value.
    InvalidArguments,
    /// The input source could not be opened.
    Open,
    /// The input source could not be read.
    Read,
    /// A record is malformed or holds a non-integer field.
    Parse,
    /// The batch violates a process invariant.
    Validation,
    /// Writing or flushing the output failed.
    Output,
}

impl Error {
    /// Creates an error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Wraps an output-side I/O failure.
    pub fn output(error: io::Error) -> Self {
        Self::new(ErrorKind::Output, format!("failed to write results: {error}"))
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(formatter)
    }
}

impl error::Error for Error {}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(ErrorKind::Validation, message)
    }
}
