//! Text policy: escaping, truncation and counts.

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Escape text for embedding in HTML markup.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shorten `text` to exactly `limit` characters (prefix plus ellipsis) if it
/// is longer than `limit`. Returns `None` when the text fits.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate(text: &str, limit: usize) -> Option<String> {
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut chars = text.char_indices();
    let cut = chars.nth(keep).map(|(i, _)| i)?;
    if text[cut..].chars().count() <= ELLIPSIS.len() {
        return None;
    }
    let mut short = String::with_capacity(cut + ELLIPSIS.len());
    short.push_str(&text[..cut]);
    short.push_str(ELLIPSIS);
    Some(short)
}

/// `"0 elements"`, `"1 element"`, `"2 elements"`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape("<script>alert('x & \"y\"')</script>"),
            "&lt;script&gt;alert(&#39;x &amp; &quot;y&quot;&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_truncate_at_limit() {
        assert_eq!(truncate(&"x".repeat(50), 50), None);
        assert_eq!(truncate("", 50), None);

        let short = truncate(&"x".repeat(51), 50).unwrap();
        assert_eq!(short.chars().count(), 50);
        assert!(short.ends_with("..."));

        let short = truncate(&"x".repeat(60), 50).unwrap();
        assert_eq!(short, format!("{}...", "x".repeat(47)));
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "é".repeat(10);
        let short = truncate(&text, 6).unwrap();
        assert_eq!(short, "ééé...");
        assert_eq!(truncate(&"é".repeat(6), 6), None);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "element"), "0 elements");
        assert_eq!(count_label(1, "element"), "1 element");
        assert_eq!(count_label(2, "element"), "2 elements");
        assert_eq!(count_label(60, "character"), "60 characters");
    }
}
