//! Callback-data namespace for the inline menus.
//!
//! Data strings are `kind:value` pairs. The namespace is versioned by the
//! menu layout: parsing and encoding live side by side so a renderer can
//! never emit a button the router fails to decode. Unknown data parses to
//! `None` and is ignored upstream.

use super::event::{ClearField, EditField, StyleTag, ToggleSwitch, WizardEvent};
use super::state::MenuPage;

pub const CLEAR_ALL: &str = "clear:all";
pub const CONFIRM_CLEAR_ALL: &str = "confirm:clear_all";
pub const CANCEL_CLEAR_ALL: &str = "cancel:clear_all";
pub const PREVIEW: &str = "action:preview";
pub const DONE: &str = "action:done";

pub fn nav(page: MenuPage) -> String {
    format!("nav:{}", page_code(page))
}

pub fn style(tag: StyleTag) -> String {
    format!("style:{}", style_code(tag))
}

pub fn set(field: EditField) -> String {
    format!("set:{}", edit_code(field))
}

pub fn clear(field: ClearField) -> String {
    format!("clear:{}", clear_code(field))
}

pub fn toggle(switch: ToggleSwitch) -> String {
    format!("toggle:{}", switch_code(switch))
}

/// Decodes callback data into a wizard event.
pub fn parse(data: &str) -> Option<WizardEvent> {
    let (kind, value) = data.split_once(':')?;
    match kind {
        "nav" => Some(WizardEvent::Navigate {
            page: parse_page(value)?,
        }),
        "style" => Some(WizardEvent::ToggleStyle {
            tag: parse_style(value)?,
        }),
        "set" => Some(WizardEvent::RequestEdit {
            field: parse_edit(value)?,
        }),
        "clear" => {
            if value == "all" {
                Some(WizardEvent::RequestClearAll)
            } else {
                Some(WizardEvent::ClearField {
                    field: parse_clear(value)?,
                })
            }
        }
        "confirm" => (value == "clear_all").then_some(WizardEvent::ConfirmClearAll),
        "cancel" => (value == "clear_all").then_some(WizardEvent::CancelClearAll),
        "action" => match value {
            "preview" => Some(WizardEvent::Preview),
            "done" => Some(WizardEvent::Done),
            _ => None,
        },
        "toggle" => Some(WizardEvent::ToggleSwitch {
            switch: parse_switch(value)?,
        }),
        _ => None,
    }
}

fn page_code(page: MenuPage) -> &'static str {
    match page {
        MenuPage::Page1 => "page1",
        MenuPage::Page2 => "page2",
        MenuPage::Page3 => "page3",
    }
}

fn parse_page(value: &str) -> Option<MenuPage> {
    match value {
        "page1" => Some(MenuPage::Page1),
        "page2" => Some(MenuPage::Page2),
        "page3" => Some(MenuPage::Page3),
        _ => None,
    }
}

fn style_code(tag: StyleTag) -> &'static str {
    match tag {
        StyleTag::Bold => "bold",
        StyleTag::Italic => "italic",
        StyleTag::Monospace => "monospace",
        StyleTag::Underline => "underline",
        StyleTag::Strikethrough => "strikethrough",
        StyleTag::Spoiler => "spoiler",
        StyleTag::Blockquote => "blockquote",
        StyleTag::Pre => "pre",
        StyleTag::None => "none",
    }
}

fn parse_style(value: &str) -> Option<StyleTag> {
    match value {
        "bold" => Some(StyleTag::Bold),
        "italic" => Some(StyleTag::Italic),
        "monospace" => Some(StyleTag::Monospace),
        "underline" => Some(StyleTag::Underline),
        "strikethrough" => Some(StyleTag::Strikethrough),
        "spoiler" => Some(StyleTag::Spoiler),
        "blockquote" => Some(StyleTag::Blockquote),
        "pre" => Some(StyleTag::Pre),
        "none" => Some(StyleTag::None),
        _ => None,
    }
}

fn edit_code(field: EditField) -> &'static str {
    match field {
        EditField::Prefix => "prefix",
        EditField::Suffix => "suffix",
        EditField::Mention => "mention",
        EditField::Link => "link",
        EditField::Replacements => "replacements",
        EditField::Removals => "removals",
        EditField::Button => "button",
        EditField::DumpChannel => "dump",
    }
}

fn parse_edit(value: &str) -> Option<EditField> {
    match value {
        "prefix" => Some(EditField::Prefix),
        "suffix" => Some(EditField::Suffix),
        "mention" => Some(EditField::Mention),
        "link" => Some(EditField::Link),
        "replacements" => Some(EditField::Replacements),
        "removals" => Some(EditField::Removals),
        "button" => Some(EditField::Button),
        "dump" => Some(EditField::DumpChannel),
        _ => None,
    }
}

fn clear_code(field: ClearField) -> &'static str {
    match field {
        ClearField::Prefix => "prefix",
        ClearField::Suffix => "suffix",
        ClearField::Mention => "mention",
        ClearField::Link => "link",
        ClearField::Button => "button",
        ClearField::DumpChannel => "dump",
    }
}

fn parse_clear(value: &str) -> Option<ClearField> {
    match value {
        "prefix" => Some(ClearField::Prefix),
        "suffix" => Some(ClearField::Suffix),
        "mention" => Some(ClearField::Mention),
        "link" => Some(ClearField::Link),
        "button" => Some(ClearField::Button),
        "dump" => Some(ClearField::DumpChannel),
        _ => None,
    }
}

fn switch_code(switch: ToggleSwitch) -> &'static str {
    match switch {
        ToggleSwitch::AutoRemoveLinks => "auto_links",
        ToggleSwitch::AutoRemoveUsernames => "auto_usernames",
        ToggleSwitch::AutoRemoveExtensionTail => "auto_ext_tail",
        ToggleSwitch::RemovalMatch => "removal_match",
    }
}

fn parse_switch(value: &str) -> Option<ToggleSwitch> {
    match value {
        "auto_links" => Some(ToggleSwitch::AutoRemoveLinks),
        "auto_usernames" => Some(ToggleSwitch::AutoRemoveUsernames),
        "auto_ext_tail" => Some(ToggleSwitch::AutoRemoveExtensionTail),
        "removal_match" => Some(ToggleSwitch::RemovalMatch),
        _ => None,
    }
}
