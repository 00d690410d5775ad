use crate::ids::ChatId;
use crate::settings::model::{CaptionStyle, Settings};

use super::state::MenuPage;

/// Input to the wizard state machine.
///
/// Button presses arrive already decoded from callback data; free text and
/// channel forwards arrive from the message stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Switch the open menu to another page.
    Navigate { page: MenuPage },
    /// XOR-toggle one style, or clear the whole set.
    ToggleStyle { tag: StyleTag },
    /// Flip one boolean switch or the removal match mode.
    ToggleSwitch { switch: ToggleSwitch },
    /// Open a modal editor for one field.
    RequestEdit { field: EditField },
    /// Reset one field to its default.
    ClearField { field: ClearField },
    /// Ask for the destructive full reset.
    RequestClearAll,
    /// Second step of the full reset: go ahead.
    ConfirmClearAll,
    /// Second step of the full reset: keep everything.
    CancelClearAll,
    /// Render a sample composition.
    Preview,
    /// Close the menu, keeping all persisted changes.
    Done,
    /// Abort the pending modal edit.
    Cancel,
    /// Free-text message consumed by a modal state.
    TextInput { text: String },
    /// Message forwarded from a channel, consumed by the dump capture.
    ChannelForward { channel: ChatId, title: String },
}

/// Style selector as carried in callback data. `None` clears the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Bold,
    Italic,
    Monospace,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    Pre,
    None,
}

impl StyleTag {
    /// The stored style behind this tag; `None` for the clear tag.
    pub fn as_style(self) -> Option<CaptionStyle> {
        match self {
            StyleTag::Bold => Some(CaptionStyle::Bold),
            StyleTag::Italic => Some(CaptionStyle::Italic),
            StyleTag::Monospace => Some(CaptionStyle::Monospace),
            StyleTag::Underline => Some(CaptionStyle::Underline),
            StyleTag::Strikethrough => Some(CaptionStyle::Strikethrough),
            StyleTag::Spoiler => Some(CaptionStyle::Spoiler),
            StyleTag::Blockquote => Some(CaptionStyle::Blockquote),
            StyleTag::Pre => Some(CaptionStyle::Pre),
            StyleTag::None => None,
        }
    }
}

/// Fields with a modal editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Prefix,
    Suffix,
    Mention,
    Link,
    Replacements,
    Removals,
    Button,
    DumpChannel,
}

impl EditField {
    /// Menu page the wizard returns to after the modal edit.
    pub fn return_page(self) -> MenuPage {
        match self {
            EditField::Replacements | EditField::Removals => MenuPage::Page2,
            _ => MenuPage::Page3,
        }
    }
}

/// Fields with a one-tap reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearField {
    Prefix,
    Suffix,
    Mention,
    Link,
    Button,
    DumpChannel,
}

impl ClearField {
    /// Resets this field to its default. Shared by the wizard and the
    /// `/clear_*` commands so both reset the same way.
    pub fn apply(self, settings: &mut Settings) {
        match self {
            ClearField::Prefix => settings.prefix.clear(),
            ClearField::Suffix => settings.suffix.clear(),
            ClearField::Mention => settings.mention_text.clear(),
            ClearField::Link => settings.link_wrap_url = None,
            ClearField::Button => settings.button = None,
            ClearField::DumpChannel => settings.dump_channel_id = None,
        }
    }
}

/// Boolean switches toggled straight from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleSwitch {
    AutoRemoveLinks,
    AutoRemoveUsernames,
    AutoRemoveExtensionTail,
    RemovalMatch,
}
