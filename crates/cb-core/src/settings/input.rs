//! Parsers for the free-text list editors.
//!
//! Both parsers are total: malformed fragments are dropped, never rejected.

use super::model::ReplacePair;

/// Parses `old - new, old - new` into replacement pairs.
///
/// Entries split on the first `-`; fragments without one and fragments with
/// an empty left side are skipped.
pub fn parse_replace_pairs(text: &str) -> Vec<ReplacePair> {
    text.split(',')
        .filter_map(|fragment| {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                return None;
            }
            let (old, new) = fragment.split_once('-')?;
            let old = old.trim();
            if old.is_empty() {
                return None;
            }
            Some(ReplacePair {
                old: old.to_string(),
                new: new.trim().to_string(),
            })
        })
        .collect()
}

/// Parses a comma-separated removal list, dropping empty tokens.
pub fn parse_removal_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
