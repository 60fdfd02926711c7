//! Core types for parsed lines

use crate::error::ParseErrorKind;
use crate::parser::classify_address;
use serde::Serialize;
use std::fmt;

/// The outcome of parsing one input line
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Extracted address text (e.g., "john@example.com"), empty if none found
    #[serde(rename = "addr_spec")]
    pub address: String,

    /// Display name (e.g., "John Doe"), empty if absent
    pub display_name: String,

    /// Set when the line did not yield a valid, non-empty address
    pub error: Option<ParseErrorKind>,
}

impl ParsedRecord {
    /// Build a record for `address`, setting `error` when the address is
    /// empty or does not match the address pattern
    #[must_use]
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        let address = address.into();
        let error = classify_address(&address);
        Self {
            address,
            display_name: display_name.into(),
            error,
        }
    }

    /// Build a record that carries `error` regardless of the address
    #[must_use]
    pub fn failed(
        address: impl Into<String>,
        display_name: impl Into<String>,
        error: ParseErrorKind,
    ) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
            error: Some(error),
        }
    }

    /// Check if the line produced a usable address
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Error message, if any
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

impl fmt::Display for ParsedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, self.display_name.is_empty()) {
            (Some(err), _) => write!(f, "error: {err}"),
            (None, true) => write!(f, "{}", self.address),
            (None, false) => write!(f, "{} <{}>", self.display_name, self.address),
        }
    }
}
