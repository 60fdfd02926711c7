//! JSON rendering of parsed records

use crate::error::Result;
use crate::types::ParsedRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Render records as pretty-printed JSON objects, four-space indented,
/// each followed by a blank line.
pub fn format_records_json(records: &[ParsedRecord]) -> Result<String> {
    let mut output = Vec::new();

    for record in records {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
        record.serialize(&mut serializer)?;
        output.extend_from_slice(b"\n\n");
    }

    Ok(String::from_utf8(output)?)
}
