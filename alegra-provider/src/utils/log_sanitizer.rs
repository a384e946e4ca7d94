//! Log sanitization utilities
//!
//! Keeps invoice payloads, client contact data and credentials
//! from being fully exposed in debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters kept visible by [`mask_secret`].
const MASK_VISIBLE_CHARS: usize = 2;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for safe logging.
///
/// Bodies within the limit are returned unchanged; longer ones keep the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential-like value, keeping only its first characters.
///
/// `"admin@example.com"` becomes `"ad***"`; empty input becomes `"<empty>"`.
pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".to_string();
    }
    let visible: String = s.chars().take(MASK_VISIBLE_CHARS).collect();
    if visible.len() == s.len() {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"[{"id":"1"}]"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // "ñ" is two bytes; the cut must not split it
        let s = "ñ".repeat(300);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn mask_keeps_prefix_only() {
        assert_eq!(mask_secret("admin@example.com"), "ad***");
    }

    #[test]
    fn mask_short_value_fully() {
        assert_eq!(mask_secret("ab"), "***");
        assert_eq!(mask_secret(""), "<empty>");
    }
}
