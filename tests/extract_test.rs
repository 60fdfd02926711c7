use email_line_parser::*;

// --- strip_comments ---

#[test]
fn test_strip_comments_basic() {
    assert_eq!(
        strip_comments("(note) user@example.com (trailing)"),
        " user@example.com "
    );
}

#[test]
fn test_strip_comments_idempotent() {
    let inputs = [
        "a (b (c) d) e",
        r#""keep (this)" (drop "this")"#,
        ")) stray <x@y.z>",
        "open (forever",
    ];

    for input in inputs {
        let once = strip_comments(input);
        assert_eq!(strip_comments(&once), once);
    }
}

#[test]
fn test_strip_comments_stray_close() {
    assert_eq!(strip_comments(")a)b"), "ab");
}

// --- unescape ---

#[test]
fn test_unescape_quote() {
    assert_eq!(unescape("a\\\"b"), "a\"b");
}

#[test]
fn test_unescape_trailing_backslash() {
    assert_eq!(unescape("x\\"), "x");
}

// --- is_valid_address ---

#[test]
fn test_valid_addresses() {
    for addr in [
        "test@test.com",
        "first.last+tag@sub.example.co.uk",
        "\"quoted\\ space\"@example.com",
        "user@[127.0.0.1]",
        "user@[IPv6:2001:db8::1]",
    ] {
        assert!(is_valid_address(addr), "{addr}");
    }
}

#[test]
fn test_invalid_addresses() {
    for addr in [
        "",
        "not-an-email",
        "john doe@example.com",
        "user@@example.com",
        ".leading@example.com",
        "double..dot@example.com",
        "user@",
        "@example.com",
    ] {
        assert!(!is_valid_address(addr), "{addr}");
    }
}

#[test]
fn test_find_addresses() {
    let found: Vec<&str> = find_addresses("mail a@x.org, or b@y.org please").collect();

    assert_eq!(found, vec!["a@x.org", "b@y.org"]);
}

// --- extract_address ---

#[test]
fn test_extract_address_angle() {
    assert_eq!(extract_address("Name <n@example.com>"), "n@example.com");
    assert_eq!(extract_address("Name < n@example.com >"), "n@example.com");
}

#[test]
fn test_extract_address_last_match() {
    assert_eq!(extract_address("a@x.org b@y.org"), "b@y.org");
}

#[test]
fn test_extract_address_whole_tokens_only() {
    assert_eq!(extract_address("user@example..com"), "user@example..com");
    assert_eq!(extract_address("a@b@c.com"), "a@b@c.com");
    assert_eq!(extract_address("x@y.z double..dot@example.com"), "x@y.z");
}

#[test]
fn test_extract_address_fallbacks() {
    assert_eq!(extract_address("Bob <not valid>"), "not valid");
    assert_eq!(extract_address("lonely-token"), "lonely-token");
    assert_eq!(extract_address("two tokens"), "");
    assert_eq!(extract_address(""), "");
}

// --- extract_display_name ---

#[test]
fn test_display_name_quoted() {
    assert_eq!(
        extract_display_name("\"Jane Roe\" <jane@example.com>", "jane@example.com"),
        "Jane Roe"
    );
}

#[test]
fn test_display_name_bare() {
    assert_eq!(
        extract_display_name("Jane Roe <jane@example.com>", "jane@example.com"),
        "Jane Roe"
    );
}

#[test]
fn test_display_name_comment_ignored() {
    assert_eq!(
        extract_display_name("(Jane) jane@example.com", "jane@example.com"),
        ""
    );
}

#[test]
fn test_display_name_without_address() {
    assert_eq!(extract_display_name("\"Only Name\"", ""), "Only Name");
}
