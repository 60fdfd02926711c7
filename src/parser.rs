//! Line parser: sequences extraction and validation into records

use crate::comments::strip_comments;
use crate::error::{ParseErrorKind, Result};
use crate::extract::{extract_address, extract_display_name};
use crate::types::ParsedRecord;
use crate::validate::is_valid_address;
use std::io::BufRead;
use tracing::debug;

/// Parse a single line such as `"John Doe" <john@example.com>`,
/// `john@example.com` or `(comment) john@example.com` into a record.
///
/// Never fails; problems are reported through [`ParsedRecord::error`].
/// The display name is filled in even when no address was found.
#[must_use]
pub fn parse_line(line: &str) -> ParsedRecord {
    let line = line.trim();
    if line.is_empty() {
        debug!("Empty line");
        return ParsedRecord::failed("", "", ParseErrorKind::EmptyLine);
    }

    let address = extract_address(&strip_comments(line));
    let display_name = extract_display_name(line, &address);

    let record = ParsedRecord::new(address, display_name);

    debug!("Parsed line: {line:?} -> {record}");
    record
}

/// Error for an extracted address, or `None` when it is usable
pub(crate) fn classify_address(address: &str) -> Option<ParseErrorKind> {
    if address.is_empty() {
        Some(ParseErrorKind::NoAddressFound)
    } else if !is_valid_address(address) {
        Some(ParseErrorKind::InvalidFormat)
    } else {
        None
    }
}

/// Parse every line of `reader`, one record per line in input order.
///
/// A byte order mark at the very start of the input is ignored.
pub fn parse_lines(reader: impl BufRead) -> Result<Vec<ParsedRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = if index == 0 {
            line.strip_prefix('\u{feff}').unwrap_or(&line)
        } else {
            line.as_str()
        };
        records.push(parse_line(text));
    }

    debug!("Parsed {} lines", records.len());
    Ok(records)
}
