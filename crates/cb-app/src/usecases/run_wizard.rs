//! Drives the settings wizard.
//!
//! Loads the user's record, feeds one event through the pure state machine
//! and executes the resulting actions against the messenger and the store.
//! The wizard edits its menu message in place; when an edit is rejected it
//! falls back to a fresh message and keeps going from there.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use cb_core::ids::{ChatId, MessageId, UserId};
use cb_core::messaging::OutgoingMessage;
use cb_core::ports::{MessengerPort, SettingsStorePort};
use cb_core::settings::Settings;
use cb_core::wizard::{
    callback, render, MenuPage, WizardAction, WizardEvent, WizardState, WizardStateMachine,
};

use crate::sessions::{SessionRegistry, UserSession};

pub struct RunWizard {
    settings: Arc<dyn SettingsStorePort>,
    messenger: Arc<dyn MessengerPort>,
    sessions: Arc<SessionRegistry>,
}

impl RunWizard {
    pub fn new(
        settings: Arc<dyn SettingsStorePort>,
        messenger: Arc<dyn MessengerPort>,
        sessions: Arc<SessionRegistry>,
    ) -> Self {
        Self {
            settings,
            messenger,
            sessions,
        }
    }

    /// `/settings`: opens the menu on page one, replacing any open dialog.
    pub async fn open(&self, user: UserId, chat: ChatId) -> Result<()> {
        self.open_on(user, chat, MenuPage::Page1).await?;
        Ok(())
    }

    /// Opens the menu and immediately applies `event` to it. Used by
    /// commands that jump straight into one wizard flow, like `/set_button`.
    pub async fn start_flow(&self, user: UserId, chat: ChatId, event: WizardEvent) -> Result<()> {
        self.open_on(user, chat, MenuPage::Page3).await?;
        self.drive(user, chat, event).await
    }

    /// Handles a wizard button press.
    ///
    /// Sessions are ephemeral while settings are not: a press on a menu from
    /// before a restart starts a fresh dialog adopting that very message, so
    /// old menus keep working.
    pub async fn handle_callback(
        &self,
        user: UserId,
        chat: ChatId,
        message: MessageId,
        data: &str,
    ) -> Result<()> {
        let Some(event) = callback::parse(data) else {
            debug!(%user, data, "unrecognized callback data, ignoring");
            return Ok(());
        };
        match self.sessions.get(user).await {
            Some(session) => session.lock().await.menu_message = Some(message),
            None => {
                debug!(%user, %message, "button press without a session, adopting the menu");
                self.sessions
                    .replace(
                        user,
                        UserSession::new(WizardState::Menu(MenuPage::Page1), Some(message)),
                    )
                    .await;
            }
        }
        self.drive(user, chat, event).await
    }

    /// Routes free text into a waiting modal editor. Returns `false` when
    /// the wizard is not waiting for text, so the caller can try other
    /// interpretations of the message.
    pub async fn handle_text(&self, user: UserId, chat: ChatId, text: &str) -> Result<bool> {
        if !self.awaiting_input(user).await {
            return Ok(false);
        }
        self.drive(
            user,
            chat,
            WizardEvent::TextInput {
                text: text.to_string(),
            },
        )
        .await?;
        Ok(true)
    }

    /// Consumes a channel forward when the dump capture is waiting for one.
    pub async fn handle_channel_forward(
        &self,
        user: UserId,
        chat: ChatId,
        channel: ChatId,
        title: &str,
    ) -> Result<bool> {
        let Some(session) = self.sessions.get(user).await else {
            return Ok(false);
        };
        let waiting = matches!(session.lock().await.state, WizardState::AwaitDumpForward);
        if !waiting {
            return Ok(false);
        }
        self.drive(
            user,
            chat,
            WizardEvent::ChannelForward {
                channel,
                title: title.to_string(),
            },
        )
        .await?;
        Ok(true)
    }

    /// `/cancel`. Returns `false` when no modal edit is pending.
    pub async fn cancel(&self, user: UserId, chat: ChatId) -> Result<bool> {
        if !self.awaiting_input(user).await {
            return Ok(false);
        }
        self.drive(user, chat, WizardEvent::Cancel).await?;
        Ok(true)
    }

    /// True while a modal editor owns the user's next message.
    pub async fn awaiting_input(&self, user: UserId) -> bool {
        match self.sessions.get(user).await {
            Some(session) => session.lock().await.state.is_modal(),
            None => false,
        }
    }

    async fn open_on(&self, user: UserId, chat: ChatId, page: MenuPage) -> Result<()> {
        let record = self.settings.get(user).await?;
        let menu = render::render_menu(page, &record, None);
        let message = self.messenger.send_message(chat, &menu).await?;
        self.sessions
            .replace(
                user,
                UserSession::new(WizardState::Menu(page), Some(message)),
            )
            .await;
        Ok(())
    }

    async fn drive(&self, user: UserId, chat: ChatId, event: WizardEvent) -> Result<()> {
        let Some(session) = self.sessions.get(user).await else {
            debug!(%user, "wizard event without a session, ignoring");
            return Ok(());
        };
        let mut session = session.lock().await;
        let mut record = self.settings.get(user).await?;
        debug!(%user, state = ?session.state, ?event, "wizard transition");
        let (next, actions) =
            WizardStateMachine::transition(session.state.clone(), &mut record, event);
        session.state = next;
        for action in actions {
            self.execute(user, chat, &mut session, &record, action)
                .await?;
        }
        if session.state.is_terminal() {
            drop(session);
            self.sessions.remove(user).await;
        }
        Ok(())
    }

    async fn execute(
        &self,
        user: UserId,
        chat: ChatId,
        session: &mut UserSession,
        record: &Settings,
        action: WizardAction,
    ) -> Result<()> {
        match action {
            WizardAction::Persist => self.settings.put(user, record).await,
            WizardAction::RenderMenu { page, notice } => {
                let menu = render::render_menu(page, record, notice.as_deref());
                self.show(chat, session, &menu).await
            }
            WizardAction::RenderConfirmClearAll => {
                self.show(chat, session, &render::render_clear_all_confirm())
                    .await
            }
            WizardAction::Prompt { text } => {
                self.show(chat, session, &OutgoingMessage::plain(text)).await
            }
            WizardAction::ShowPreview => {
                // Separate message so the menu stays on screen.
                self.messenger
                    .send_message(chat, &render::render_preview(record))
                    .await?;
                Ok(())
            }
            WizardAction::Close { notice } => {
                self.show(chat, session, &OutgoingMessage::plain(notice))
                    .await
            }
            WizardAction::Notice { text } => {
                self.messenger
                    .send_message(chat, &OutgoingMessage::plain(text))
                    .await?;
                Ok(())
            }
        }
    }

    /// Edits the dialog message in place, falling back to a new message
    /// when the edit is rejected (menu deleted, message too old).
    async fn show(
        &self,
        chat: ChatId,
        session: &mut UserSession,
        content: &OutgoingMessage,
    ) -> Result<()> {
        if let Some(message) = session.menu_message {
            match self.messenger.edit_message(chat, message, content).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    warn!(%chat, %message, error = %err, "menu edit failed, sending a new message")
                }
            }
        }
        let message = self.messenger.send_message(chat, content).await?;
        session.menu_message = Some(message);
        Ok(())
    }
}
