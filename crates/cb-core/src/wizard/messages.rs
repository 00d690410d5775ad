//! User-facing wizard text: prompts, notices and confirmations.
//!
//! All wizard strings live here so transitions and renderers never embed
//! literals of their own. Dynamic helpers escape user-controlled values
//! because menu notices travel as HTML.

use crate::caption::html::escape;
use crate::settings::model::CaptionStyle;

use super::event::{ClearField, EditField};

pub const PROMPT_PREFIX: &str = "✏️ Send your new Prefix text.";
pub const PROMPT_SUFFIX: &str = "✏️ Send your new Suffix text.";
pub const PROMPT_LINK: &str = "🔗 Send the URL to wrap your captions.";
pub const PROMPT_MENTION: &str =
    "💬 Send your custom Mention text (like 'Join my channel - @example').";
pub const PROMPT_REPLACEMENTS: &str = "✏️ Send replace pairs like: old - new, old - new";
pub const PROMPT_REMOVALS: &str = "✏️ Send comma-separated words to remove: hd, 2025, Hindi";
pub const PROMPT_BUTTON_LABEL: &str = "🔘 Send BUTTON TEXT (what will appear on the button).";
pub const PROMPT_BUTTON_URL: &str = "🔘 Now send BUTTON URL (eg. https://example.com).";
pub const PROMPT_DUMP_FORWARD: &str = "📦 To set a dump channel:\n1) Add this bot to your channel as admin.\n2) Forward any message from that channel to me.";

pub const DUMP_FORWARD_HINT: &str =
    "📦 Forward a message from your channel to register it, or send /cancel to abort.";

pub const CLEAR_ALL_QUESTION: &str =
    "⚠️ Are you sure you want to clear ALL your saved settings?";
pub const CLEAR_ALL_DONE: &str = "🧹 All settings cleared!";
pub const CLEAR_ALL_CANCELLED: &str = "❌ Clear all cancelled.";

pub const SETTINGS_SAVED: &str = "✅ Settings saved!";
pub const MENU_CLOSED: &str = "❌ Settings menu closed.";
pub const STYLE_CLEARED: &str = "🚫 Style cleared.";

pub fn prompt_for(field: EditField) -> &'static str {
    match field {
        EditField::Prefix => PROMPT_PREFIX,
        EditField::Suffix => PROMPT_SUFFIX,
        EditField::Mention => PROMPT_MENTION,
        EditField::Link => PROMPT_LINK,
        EditField::Replacements => PROMPT_REPLACEMENTS,
        EditField::Removals => PROMPT_REMOVALS,
        EditField::Button => PROMPT_BUTTON_LABEL,
        EditField::DumpChannel => PROMPT_DUMP_FORWARD,
    }
}

pub fn style_toggled(style: CaptionStyle, now_on: bool) -> String {
    if now_on {
        format!("✅ Style <code>{}</code> enabled.", style.label())
    } else {
        format!("☑️ Style <code>{}</code> disabled.", style.label())
    }
}

pub fn switch_toggled(label: &str, now_on: bool) -> String {
    let state = if now_on { "on" } else { "off" };
    format!("✅ {label}: <code>{state}</code>")
}

pub fn removal_match_switched(whole_word: bool) -> String {
    let mode = if whole_word { "whole word" } else { "substring" };
    format!("✅ Removal match set to <code>{mode}</code>.")
}

pub fn field_updated(field: EditField) -> &'static str {
    match field {
        EditField::Prefix => "✅ Prefix updated.",
        EditField::Suffix => "✅ Suffix updated.",
        EditField::Mention => "✅ Mention updated.",
        EditField::Link => "✅ Link updated.",
        EditField::Replacements => "✅ Replace list updated.",
        EditField::Removals => "✅ Remove list updated.",
        EditField::Button => "✅ Button saved.",
        EditField::DumpChannel => "✅ Dump channel saved.",
    }
}

pub fn field_cleared(field: ClearField) -> &'static str {
    match field {
        ClearField::Prefix => "✅ Prefix cleared!",
        ClearField::Suffix => "✅ Suffix cleared!",
        ClearField::Mention => "✅ Mention cleared!",
        ClearField::Link => "✅ Link cleared!",
        ClearField::Button => "✅ Button cleared!",
        ClearField::DumpChannel => "✅ Dump channel cleared!",
    }
}

pub fn replacements_saved(count: usize) -> String {
    format!("✅ Replace list updated: {count} pair(s).")
}

pub fn removals_saved(count: usize) -> String {
    format!("✅ Remove list updated: {count} word(s).")
}

pub fn dump_channel_set(title: &str) -> String {
    format!("✅ Dump channel set to <code>{}</code>.", escape(title))
}
