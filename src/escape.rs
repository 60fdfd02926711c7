//! Backslash escape decoding for quoted display names

/// Resolve backslash escapes: `\x` becomes `x` for any character `x`.
///
/// A trailing lone backslash is dropped. The result is trimmed.
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut escape = false;

    for c in raw.chars() {
        if escape {
            result.push(c);
            escape = false;
        } else if c == '\\' {
            escape = true;
        } else {
            result.push(c);
        }
    }

    result.trim().to_string()
}
