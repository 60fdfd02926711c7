//! Error types for line parsing

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a single line did not yield a usable address.
///
/// These never abort a batch; they travel inside the record for that line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The line was blank after trimming
    #[error("empty line")]
    EmptyLine,

    /// No candidate address could be located
    #[error("no email address found")]
    NoAddressFound,

    /// A candidate was extracted but does not match the address pattern
    #[error("invalid email format")]
    InvalidFormat,
}

impl Serialize for ParseErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors from reading input or writing output around the parser
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read input lines
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize records
    #[error("Failed to format JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialized output was not valid UTF-8
    #[error("Invalid UTF-8 in output: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, Error>;
