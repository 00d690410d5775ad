//! Menu page rendering.
//!
//! Pure functions from a settings record to outbound messages. Every page
//! header shows the current values, so re-rendering after a mutation is
//! enough to keep the display honest.

use crate::caption::compose;
use crate::caption::html::escape;
use crate::messaging::outgoing::{InlineButton, InlineKeyboard, OutgoingMessage};
use crate::settings::model::{CaptionStyle, RemovalMatch, Settings};

use super::callback;
use super::event::{ClearField, EditField, StyleTag, ToggleSwitch};
use super::messages;
use super::state::MenuPage;

/// Fixed sample caption used by every preview.
pub const PREVIEW_SAMPLE: &str =
    "Orbit City S01 Ep 04 [Dual Audio] 1080p HEVC 10bit WEB-DL ESub [GrabTG].mkv";

/// Renders one menu page, optionally headed by a one-line notice.
pub fn render_menu(page: MenuPage, settings: &Settings, notice: Option<&str>) -> OutgoingMessage {
    let body = match page {
        MenuPage::Page1 => page1_text(settings),
        MenuPage::Page2 => page2_text(settings),
        MenuPage::Page3 => page3_text(settings),
    };
    let text = match notice {
        Some(notice) => format!("{notice}\n\n{body}"),
        None => body,
    };
    let keyboard = match page {
        MenuPage::Page1 => page1_keyboard(settings),
        MenuPage::Page2 => page2_keyboard(settings),
        MenuPage::Page3 => page3_keyboard(),
    };
    OutgoingMessage::html(text).with_keyboard(keyboard)
}

/// Renders the destructive reset confirmation.
pub fn render_clear_all_confirm() -> OutgoingMessage {
    let keyboard = InlineKeyboard::new()
        .row(vec![InlineButton::callback(
            "✅ Yes, clear everything",
            callback::CONFIRM_CLEAR_ALL,
        )])
        .row(vec![InlineButton::callback(
            "❌ No, keep my settings",
            callback::CANCEL_CLEAR_ALL,
        )]);
    OutgoingMessage::plain(messages::CLEAR_ALL_QUESTION).with_keyboard(keyboard)
}

/// Renders the before/after pair for the fixed sample caption.
pub fn render_preview(settings: &Settings) -> OutgoingMessage {
    let composed = compose(PREVIEW_SAMPLE, settings);
    OutgoingMessage::html(format!(
        "🪄 <b>Preview</b>\n\n{composed}\n\n<b>Sample:</b>\n<code>{}</code>",
        escape(PREVIEW_SAMPLE)
    ))
}

// ===== Page text =====

fn page1_text(settings: &Settings) -> String {
    format!(
        "⚙️ <b>Settings (1/3)</b>\n\n<b>Styles:</b> <code>{}</code>\n\nPick the styles applied to every caption:",
        styles_value(settings)
    )
}

fn page2_text(settings: &Settings) -> String {
    let block = settings
        .styles
        .iter()
        .find(|s| s.is_block())
        .map(CaptionStyle::label)
        .unwrap_or("-");
    let match_mode = match settings.removal_match {
        RemovalMatch::Substring => "substring",
        RemovalMatch::WholeWord => "whole word",
    };
    format!(
        "⚙️ <b>Settings (2/3)</b>\n\n\
         <b>Block style:</b> <code>{block}</code>\n\
         <b>Removal match:</b> <code>{match_mode}</code>\n\
         <b>Replace pairs:</b> <code>{}</code>\n\
         <b>Remove words:</b> <code>{}</code>\n\n\
         Block formats and automatic cleanup:",
        settings.replacements.len(),
        settings.removals.len()
    )
}

fn page3_text(settings: &Settings) -> String {
    let button = settings
        .button
        .as_ref()
        .map(|b| format!("{} ({})", b.label, b.url));
    let dump = settings.dump_channel_id.map(|id| id.to_string());
    format!(
        "⚙️ <b>Settings (3/3)</b>\n\n\
         <b>Prefix:</b> <code>{}</code>\n\
         <b>Suffix:</b> <code>{}</code>\n\
         <b>Link:</b> <code>{}</code>\n\
         <b>Mention:</b> <code>{}</code>\n\
         <b>Button:</b> <code>{}</code>\n\
         <b>Dump channel:</b> <code>{}</code>",
        shown(&settings.prefix),
        shown(&settings.suffix),
        shown(settings.link_wrap_url.as_deref().unwrap_or("")),
        shown(&settings.mention_text),
        shown(button.as_deref().unwrap_or("")),
        shown(dump.as_deref().unwrap_or("")),
    )
}

fn styles_value(settings: &Settings) -> String {
    if settings.styles.is_empty() {
        return "-".to_string();
    }
    settings
        .styles
        .iter()
        .map(CaptionStyle::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escaped value for a `<code>` slot; `-` for empty.
fn shown(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        escape(value)
    }
}

// ===== Keyboards =====

fn page1_keyboard(settings: &Settings) -> InlineKeyboard {
    InlineKeyboard::new()
        .row(vec![
            style_button(settings, CaptionStyle::Bold, StyleTag::Bold, "Bold"),
            style_button(settings, CaptionStyle::Italic, StyleTag::Italic, "Italic"),
        ])
        .row(vec![
            style_button(
                settings,
                CaptionStyle::Monospace,
                StyleTag::Monospace,
                "Monospace",
            ),
            style_button(
                settings,
                CaptionStyle::Underline,
                StyleTag::Underline,
                "Underline",
            ),
        ])
        .row(vec![
            style_button(
                settings,
                CaptionStyle::Strikethrough,
                StyleTag::Strikethrough,
                "Strikethrough",
            ),
            style_button(settings, CaptionStyle::Spoiler, StyleTag::Spoiler, "Spoiler"),
        ])
        .row(vec![InlineButton::callback(
            "🚫 No Style",
            callback::style(StyleTag::None),
        )])
        .row(vec![InlineButton::callback(
            "Next ➡️",
            callback::nav(MenuPage::Page2),
        )])
}

fn page2_keyboard(settings: &Settings) -> InlineKeyboard {
    let match_label = match settings.removal_match {
        RemovalMatch::Substring => "Match: substring",
        RemovalMatch::WholeWord => "Match: whole word",
    };
    InlineKeyboard::new()
        .row(vec![
            style_button(
                settings,
                CaptionStyle::Blockquote,
                StyleTag::Blockquote,
                "❝ Blockquote",
            ),
            style_button(settings, CaptionStyle::Pre, StyleTag::Pre, "Pre (code)"),
        ])
        .row(vec![
            switch_button(
                settings.auto_remove_links,
                "Auto: links",
                ToggleSwitch::AutoRemoveLinks,
            ),
            switch_button(
                settings.auto_remove_usernames,
                "Auto: usernames",
                ToggleSwitch::AutoRemoveUsernames,
            ),
        ])
        .row(vec![switch_button(
            settings.auto_remove_extension_tail,
            "Auto: ext tail",
            ToggleSwitch::AutoRemoveExtensionTail,
        )])
        .row(vec![InlineButton::callback(
            match_label,
            callback::toggle(ToggleSwitch::RemovalMatch),
        )])
        .row(vec![
            InlineButton::callback("✏️ Replace Words", callback::set(EditField::Replacements)),
            InlineButton::callback("✏️ Remove Words", callback::set(EditField::Removals)),
        ])
        .row(vec![
            InlineButton::callback("⬅️ Back", callback::nav(MenuPage::Page1)),
            InlineButton::callback("Next ➡️", callback::nav(MenuPage::Page3)),
        ])
}

fn page3_keyboard() -> InlineKeyboard {
    InlineKeyboard::new()
        .row(vec![
            InlineButton::callback("✏️ Set Prefix", callback::set(EditField::Prefix)),
            InlineButton::callback("✏️ Set Suffix", callback::set(EditField::Suffix)),
        ])
        .row(vec![
            InlineButton::callback("🔗 Set Link", callback::set(EditField::Link)),
            InlineButton::callback("💬 Set Mention", callback::set(EditField::Mention)),
        ])
        .row(vec![
            InlineButton::callback("🔘 Set Button", callback::set(EditField::Button)),
            InlineButton::callback("📦 Set Dump Channel", callback::set(EditField::DumpChannel)),
        ])
        .row(vec![
            InlineButton::callback("🗑 Clear Prefix", callback::clear(ClearField::Prefix)),
            InlineButton::callback("🗑 Clear Suffix", callback::clear(ClearField::Suffix)),
        ])
        .row(vec![
            InlineButton::callback("🗑 Clear Link", callback::clear(ClearField::Link)),
            InlineButton::callback("🗑 Clear Mention", callback::clear(ClearField::Mention)),
        ])
        .row(vec![
            InlineButton::callback("🗑 Clear Button", callback::clear(ClearField::Button)),
            InlineButton::callback("🗑 Clear Dump", callback::clear(ClearField::DumpChannel)),
        ])
        .row(vec![InlineButton::callback(
            "🧹 Clear All Settings",
            callback::CLEAR_ALL,
        )])
        .row(vec![InlineButton::callback(
            "🪄 Preview Caption",
            callback::PREVIEW,
        )])
        .row(vec![
            InlineButton::callback("⬅️ Back", callback::nav(MenuPage::Page2)),
            InlineButton::callback("✅ Done", callback::DONE),
        ])
}

fn style_button(
    settings: &Settings,
    style: CaptionStyle,
    tag: StyleTag,
    label: &str,
) -> InlineButton {
    InlineButton::callback(marked(settings.styles.contains(style), label), callback::style(tag))
}

fn switch_button(active: bool, label: &str, switch: ToggleSwitch) -> InlineButton {
    InlineButton::callback(marked(active, label), callback::toggle(switch))
}

fn marked(active: bool, label: &str) -> String {
    if active {
        format!("✅ {label}")
    } else {
        label.to_string()
    }
}
