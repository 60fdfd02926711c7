//! Address and display-name extraction from a single line

use crate::comments::strip_comments;
use crate::escape::unescape;
use crate::validate::{address_matches, is_valid_address};
use tracing::trace;

/// Byte positions of the first `<` and the first `>` after it, if both exist
fn angle_span(input: &str) -> Option<(usize, usize)> {
    let start = input.find('<')?;
    let end = input[start + 1..].find('>')? + start + 1;
    Some((start, end))
}

/// Locate the most plausible address in a comment-stripped line.
///
/// Tries, in order:
/// - a valid address between `<` and `>`
/// - the last whole-token address outside the `<...>` pair
/// - the non-empty content of `<...>` even if it is not valid
/// - the whole line when it is a single bare token
///
/// The last two return candidates that fail validation, so the caller can
/// report a malformed address instead of a missing one. Returns an empty
/// string when nothing qualifies.
#[must_use]
pub fn extract_address(stripped: &str) -> String {
    let span = angle_span(stripped);
    let bracketed = span.map(|(start, end)| stripped[start + 1..end].trim());

    if let Some(candidate) = bracketed
        && is_valid_address(candidate)
    {
        trace!("Address from angle brackets: {candidate}");
        return candidate.to_string();
    }

    let outside_brackets = |m: &regex::Match<'_>| {
        span.is_none_or(|(start, end)| m.end() <= start || m.start() > end)
    };
    if let Some(last) = address_matches(stripped).filter(outside_brackets).last() {
        trace!("Address from pattern search: {}", last.as_str());
        return last.as_str().to_string();
    }

    if let Some(candidate) = bracketed.filter(|c| !c.is_empty()) {
        trace!("Unvalidated angle-bracket candidate: {candidate}");
        return candidate.to_string();
    }

    let bare = stripped.trim();
    let single_token = !bare.is_empty()
        && !bare.contains(|c: char| c.is_whitespace() || matches!(c, '"' | '<' | '>'));
    if single_token {
        trace!("Unvalidated bare candidate: {bare}");
        return bare.to_string();
    }

    String::new()
}

/// Recover the display name that accompanies `address` in `line`.
///
/// `line` is the original text before comment stripping. Quoted names win
/// over bare words in front of `<`.
#[must_use]
pub fn extract_display_name(line: &str, address: &str) -> String {
    let remaining = if address.is_empty() {
        line.to_string()
    } else {
        line.replacen(address, "", 1)
    };
    let remaining = strip_comments(&remaining);

    if let (Some(start), Some(end)) = (remaining.find('"'), remaining.rfind('"'))
        && end > start
    {
        return unescape(&remaining[start + 1..end]);
    }

    if let Some((before, _)) = remaining.split_once('<') {
        return before.trim().to_string();
    }

    String::new()
}
