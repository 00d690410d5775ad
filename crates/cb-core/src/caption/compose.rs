//! Caption composition pipeline.
//!
//! Eight stages in a fixed order: replace, remove, auto-clean, prefix,
//! suffix, mention, escape + styles, link wrap. The order is observable
//! behavior; rearranging it changes results for real inputs.

use crate::settings::model::{CaptionStyle, RemovalMatch, Settings, StyleSet};

use super::clean::{collapse_whitespace, strip_extension_tail, strip_urls, strip_usernames};
use super::extension::{is_video_extension, split_trailing_extension};
use super::html::escape;
use super::matcher::{remove_word_ci, replace_all_ci};

/// Runs `original` through the full pipeline for one settings record.
///
/// Total: any input and any record produce a deliverable string. A default
/// record returns the escaped input unchanged.
pub fn compose(original: &str, settings: &Settings) -> String {
    let mut text = original.to_string();

    // 1. Literal replacement, list order, case-insensitive.
    for pair in &settings.replacements {
        if pair.old.is_empty() {
            continue;
        }
        text = replace_all_ci(&text, &pair.old, &pair.new);
    }

    // 2. Literal removal. With nothing to remove this stage is a strict
    //    no-op: no collapse, no trim.
    let removals: Vec<&str> = settings
        .removals
        .iter()
        .map(String::as_str)
        .filter(|token| !token.is_empty())
        .collect();
    if !removals.is_empty() {
        for token in removals {
            text = match settings.removal_match {
                RemovalMatch::Substring => replace_all_ci(&text, token, ""),
                RemovalMatch::WholeWord => remove_word_ci(&text, token),
            };
        }
        text = collapse_whitespace(&text);
    }

    // 3. Conditional auto-clean, each step followed by whitespace repair.
    if settings.auto_remove_links {
        text = collapse_whitespace(&strip_urls(&text));
    }
    if settings.auto_remove_usernames {
        text = collapse_whitespace(&strip_usernames(&text));
    }
    if settings.auto_remove_extension_tail {
        text = collapse_whitespace(&strip_extension_tail(&text));
    }

    // 4. Prefix.
    if !settings.prefix.is_empty() {
        text = if text.is_empty() {
            settings.prefix.clone()
        } else {
            format!("{} {}", settings.prefix, text)
        };
    }

    // 5. Suffix, placed in front of a trailing video container extension.
    if !settings.suffix.is_empty() {
        text = insert_suffix(&text, &settings.suffix);
    }

    // 6. Mention block.
    if !settings.mention_text.is_empty() {
        text = if text.is_empty() {
            settings.mention_text.clone()
        } else {
            format!("{}\n\n{}", text, settings.mention_text)
        };
    }

    // 7. Escape once, then wrap styles around the escaped text.
    let mut text = escape(&text);
    if !text.is_empty() {
        text = wrap_styles(text, &settings.styles);
    }

    // 8. Link wrap: the styled text becomes the visible label.
    if let Some(url) = settings.link_wrap_url.as_deref() {
        if !url.is_empty() && !text.is_empty() {
            text = format!("<a href=\"{}\">{}</a>", escape(url), text);
        }
    }

    text
}

fn insert_suffix(text: &str, suffix: &str) -> String {
    if text.is_empty() {
        return suffix.to_string();
    }
    if let Some((base, ext)) = split_trailing_extension(text) {
        if is_video_extension(ext) {
            return format!("{base} {suffix}.{ext}");
        }
    }
    format!("{text} {suffix}")
}

// Canonical nesting, innermost first. Monospace sits innermost so its
// rendered content never carries nested tags.
const INLINE_WRAP_ORDER: [(CaptionStyle, &str, &str); 6] = [
    (CaptionStyle::Monospace, "<code>", "</code>"),
    (CaptionStyle::Bold, "<b>", "</b>"),
    (CaptionStyle::Italic, "<i>", "</i>"),
    (CaptionStyle::Underline, "<u>", "</u>"),
    (CaptionStyle::Strikethrough, "<s>", "</s>"),
    (CaptionStyle::Spoiler, "<tg-spoiler>", "</tg-spoiler>"),
];

fn wrap_styles(text: String, styles: &StyleSet) -> String {
    let mut text = text;
    for (style, open, close) in INLINE_WRAP_ORDER {
        if styles.contains(style) {
            text = format!("{open}{text}{close}");
        }
    }
    // Block styles wrap outermost; blockquote wins when a stored record
    // somehow carries both.
    if styles.contains(CaptionStyle::Blockquote) {
        text = format!("<blockquote>{text}</blockquote>");
    } else if styles.contains(CaptionStyle::Pre) {
        text = format!("<pre>{text}</pre>");
    }
    text
}
