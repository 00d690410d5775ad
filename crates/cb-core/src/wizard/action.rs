use super::state::MenuPage;

/// Effect requested by a wizard transition.
///
/// The machine never talks to storage or the transport itself; the session
/// layer executes these in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Write the mutated settings record to the store.
    Persist,
    /// Render a menu page, optionally headed by a one-line notice.
    RenderMenu {
        page: MenuPage,
        notice: Option<String>,
    },
    /// Render the clear-all confirmation keyboard.
    RenderConfirmClearAll,
    /// Replace the menu with a modal input prompt.
    Prompt { text: String },
    /// Send a sample composition as a separate message.
    ShowPreview,
    /// Replace the menu with a closing notice; the session ends.
    Close { notice: String },
    /// Send a standalone notice without touching the menu.
    Notice { text: String },
}
