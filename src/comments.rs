//! Parenthesized comment removal

/// Remove `(...)` comments from `input`, keeping parentheses that sit inside
/// a double-quoted region.
///
/// Quotes only toggle at nesting depth zero, so a `"` inside a comment is
/// inert and is dropped along with the rest of the comment. A stray `)` at
/// depth zero is ignored; an unclosed `(` suppresses the rest of the line.
#[must_use]
pub fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut depth: usize = 0;
    let mut in_quote = false;

    for c in input.chars() {
        match c {
            '"' if depth == 0 => {
                in_quote = !in_quote;
                result.push(c);
            }
            '(' if !in_quote => depth += 1,
            ')' if !in_quote => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }

    result
}
