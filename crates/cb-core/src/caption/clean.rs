//! Automatic caption cleanup: URLs, usernames and extension tails.
//!
//! Each helper removes one category of junk and leaves whitespace repair to
//! [`collapse_whitespace`], which the composer runs after every enabled step.

use lazy_static::lazy_static;
use regex::Regex;

use super::extension::VIDEO_EXTENSIONS;

lazy_static! {
    /// Two or more consecutive whitespace characters. A single separator
    /// stays untouched, so deliberate line breaks survive the cleanup.
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();

    /// `http://` or `https://` with at least one address character behind
    /// it. The body class is the ASCII range URLs are written in; a bare
    /// scheme with nothing after it is not a URL.
    static ref URL: Regex = Regex::new(r"(?i)https?://[!$-_a-z]+").unwrap();

    /// `@username` tokens: an `@` followed by at least one word character.
    static ref USERNAME: Regex = Regex::new(r"@\w+").unwrap();

    /// A video container extension and everything behind it on its line.
    static ref EXTENSION_TAIL: Regex = Regex::new(&format!(
        r"(?i)\.(?:{})[^\n]*",
        VIDEO_EXTENSIONS.join("|")
    ))
    .unwrap();
}

/// Collapses every run of two or more whitespace characters into a single
/// space and trims both ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Strips `http://` and `https://` URLs.
pub(crate) fn strip_urls(text: &str) -> String {
    URL.replace_all(text, "").into_owned()
}

/// Strips `@username` tokens.
pub(crate) fn strip_usernames(text: &str) -> String {
    USERNAME.replace_all(text, "").into_owned()
}

/// Removes everything from the first video container extension tail to the
/// end of that line. Release tags glued behind `.mkv` disappear with it.
pub(crate) fn strip_extension_tail(text: &str) -> String {
    match EXTENSION_TAIL.find(text) {
        Some(tail) => format!("{}{}", &text[..tail.start()], &text[tail.end()..]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a   b\t\tc"), "a b c");
        assert_eq!(collapse_whitespace("  padded  "), "padded");
        // Single separators survive untouched.
        assert_eq!(collapse_whitespace("line1\nline2"), "line1\nline2");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(
            strip_urls("watch https://example.com/x?id=1 now"),
            "watch  now"
        );
        assert_eq!(strip_urls("HTTP://CAPS.example also"), " also");
        assert_eq!(strip_urls("no links here"), "no links here");
    }

    #[test]
    fn test_strip_urls_ignores_bare_scheme() {
        assert_eq!(strip_urls("https:// is not a link"), "https:// is not a link");
    }

    #[test]
    fn test_strip_usernames() {
        assert_eq!(strip_usernames("join @my_channel today"), "join  today");
        assert_eq!(strip_usernames("mail me @ home"), "mail me @ home");
        assert_eq!(strip_usernames("@a@b"), "");
    }

    #[test]
    fn test_strip_extension_tail_takes_rest_of_line() {
        assert_eq!(
            strip_extension_tail("Movie S01.mkv [Grab] extras\nsecond line"),
            "Movie S01\nsecond line"
        );
    }

    #[test]
    fn test_strip_extension_tail_picks_earliest_extension() {
        assert_eq!(strip_extension_tail("a.mp4 b.mkv"), "a");
    }

    #[test]
    fn test_strip_extension_tail_without_match() {
        assert_eq!(strip_extension_tail("nothing to do"), "nothing to do");
    }
}
