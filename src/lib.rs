// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Line Parser
//!
//! Turns free-form, loosely RFC 5322 formatted lines into structured
//! address records: the address spec, an optional display name and a
//! per-line error.
//!
//! # Features
//!
//! - Parenthesized comment removal that respects quoted text
//! - Angle-bracket addresses preferred over bare ones
//! - Quoted and bare display names, with backslash escapes resolved
//! - Validation against an RFC 5322 style addr-spec pattern
//! - Per-line errors that never abort a batch
//!
//! # Example
//!
//! ```rust
//! use email_line_parser::parse_line;
//!
//! let record = parse_line(r#""John Doe" <john@example.com> (work)"#);
//!
//! assert_eq!(record.address, "john@example.com");
//! assert_eq!(record.display_name, "John Doe");
//! assert!(record.error.is_none());
//! ```

mod comments;
mod error;
mod escape;
mod extract;
mod output;
mod parser;
mod types;
mod validate;

pub use comments::strip_comments;
pub use error::{Error, ParseErrorKind, Result};
pub use escape::unescape;
pub use extract::{extract_address, extract_display_name};
pub use output::format_records_json;
pub use parser::{parse_line, parse_lines};
pub use types::ParsedRecord;
pub use validate::{find_addresses, is_valid_address};
