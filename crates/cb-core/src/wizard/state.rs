use serde::{Deserialize, Serialize};

/// Menu page of the settings wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuPage {
    /// Inline style toggles.
    Page1,
    /// Block styles, cleanup switches and list editors.
    Page2,
    /// Field editors, preview and exit.
    Page3,
}

impl MenuPage {
    pub fn number(self) -> u8 {
        match self {
            MenuPage::Page1 => 1,
            MenuPage::Page2 => 2,
            MenuPage::Page3 => 3,
        }
    }
}

/// Wizard session state.
/// 设置向导的会话状态。
///
/// `Menu` pages are re-entrant displays. The `Await*` states are modal: the
/// next free-text message (or channel forward) from the user belongs to the
/// wizard. `Done` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// A menu page is open.
    Menu(MenuPage),
    /// Destructive reset waiting for an explicit yes or no.
    ConfirmClearAll,
    /// Waiting for new prefix text.
    AwaitPrefix,
    /// Waiting for new suffix text.
    AwaitSuffix,
    /// Waiting for new mention text.
    AwaitMention,
    /// Waiting for the link wrap URL.
    AwaitLink,
    /// Waiting for a `old - new, ...` replacement list.
    AwaitReplacements,
    /// Waiting for a comma-separated removal list.
    AwaitRemovals,
    /// Waiting for the button label, first half of the button capture.
    AwaitButtonText,
    /// Waiting for the button URL; carries the captured label.
    AwaitButtonUrl { label: String },
    /// Waiting for a message forwarded from the dump channel.
    AwaitDumpForward,
    /// Session finished. Terminal.
    Done,
}

impl WizardState {
    /// True while the wizard owns the user's next free-text input.
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            WizardState::AwaitPrefix
                | WizardState::AwaitSuffix
                | WizardState::AwaitMention
                | WizardState::AwaitLink
                | WizardState::AwaitReplacements
                | WizardState::AwaitRemovals
                | WizardState::AwaitButtonText
                | WizardState::AwaitButtonUrl { .. }
                | WizardState::AwaitDumpForward
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Done)
    }
}
