//! Address pattern approximating RFC 5322 addr-spec syntax

use regex::{Match, Regex, RegexBuilder};

/// Quoted-string or dot-atom local part, dot-atom or bracketed literal domain
const ADDR_SPEC: &str = r#"("(?:[!#-\[\]-~]|\\[\t -~])*"|[!#-'*+\-/-9=?A-Z\^-~]+(?:\.[!#-'*+\-/-9=?A-Z\^-~]+)*)@([!#-'*+\-/-9=?A-Z\^-~]+(?:\.[!#-'*+\-/-9=?A-Z\^-~]+)*|\[[!-Z\^-~]*\])"#;

fn build(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .unwrap()
}

static ADDR_SPEC_EXACT: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| build(&format!("^(?:{ADDR_SPEC})$")));

static ADDR_SPEC_SEARCH: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| build(ADDR_SPEC));

/// Check whether the whole of `candidate` is a syntactically valid address
#[must_use]
pub fn is_valid_address(candidate: &str) -> bool {
    ADDR_SPEC_EXACT.is_match(candidate)
}

/// Characters allowed directly before or after an address in running text
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '<' | '>' | ',' | ';')
}

/// Pattern hits in `text` that span a whole token.
///
/// A hit glued to other characters (`user@example` inside `user@example..com`)
/// is a fragment of a malformed token and is skipped.
pub(crate) fn address_matches(text: &str) -> impl Iterator<Item = Match<'_>> {
    ADDR_SPEC_SEARCH.find_iter(text).filter(move |m| {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        before.is_none_or(is_delimiter) && after.is_none_or(is_delimiter)
    })
}

/// All whole-token addresses in `text`, left to right
pub fn find_addresses(text: &str) -> impl Iterator<Item = &str> {
    address_matches(text).map(|m| m.as_str())
}
