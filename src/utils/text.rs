//! String helpers shared by the rules and the reporters.

/// Length in Unicode scalar values, which is what users perceive as characters
/// for the Latin, CJK and emoji text found in titles.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Shortens `s` to at most `max` characters, ending with `...` when cut.
///
/// Cuts on a character boundary, never inside a multi-byte sequence.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if char_len(s) <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Returns the value if it contains anything besides whitespace.
pub fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("Hello", 48), "Hello");
    }

    #[test]
    fn test_truncate_chars_exact_length_unchanged() {
        let s = "a".repeat(48);
        assert_eq!(truncate_chars(&s, 48), s);
    }

    #[test]
    fn test_truncate_chars_adds_ellipsis() {
        let s = "a".repeat(60);
        let out = truncate_chars(&s, 48);
        assert_eq!(char_len(&out), 48);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let s = "é".repeat(50);
        let out = truncate_chars(&s, 10);
        assert_eq!(out, format!("{}...", "é".repeat(7)));
    }

    #[test]
    fn test_non_blank() {
        let blank = "   ".to_string();
        let text = "x".to_string();
        assert_eq!(non_blank(Some(&blank)), None);
        assert_eq!(non_blank(Some(&text)), Some("x"));
        assert_eq!(non_blank(None), None);
    }
}
