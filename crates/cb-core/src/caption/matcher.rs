//! Case-insensitive literal matching over caption text.
//!
//! Needles come from user lists, so every one is escaped before it becomes
//! a pattern; no pattern syntax leaks through. Matching is `(?i)` with
//! Unicode case folding, which finds `WEB-DL` and `web-dl` alike.

use regex::{NoExpand, Regex};

/// Compiles `needle` as an escaped case-insensitive literal.
fn literal_ci(needle: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(needle)))
        .expect("escaped literal is a valid pattern")
}

/// Replaces every case-insensitive occurrence of `needle`.
pub(crate) fn replace_all_ci(text: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    literal_ci(needle)
        .replace_all(text, NoExpand(replacement))
        .into_owned()
}

/// Removes case-insensitive occurrences of `token` whose neighbours on both
/// sides are non-alphanumeric or text boundaries.
pub(crate) fn remove_word_ci(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut pos = 0usize;
    for hit in literal_ci(token).find_iter(text) {
        if is_word_boundary(text, hit.start(), hit.end()) {
            out.push_str(&text[pos..hit.start()]);
            pos = hit.end();
        }
    }
    out.push_str(&text[pos..]);
    out
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}
