//! Minimal HTML escaping for the transport markup.

/// Escapes `&`, `<` and `>`. Applied exactly once, before style wrapping;
/// markup produced by the pipeline itself is never escaped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn test_escape_replaces_markup_characters() {
        assert_eq!(escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape("Movie S01 [1080p]"), "Movie S01 [1080p]");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // Escaping must not double-process its own output.
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }
}
