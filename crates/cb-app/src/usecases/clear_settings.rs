//! Single-field clears issued as commands, without opening the menu.

use std::sync::Arc;

use anyhow::Result;

use cb_core::ids::{ChatId, UserId};
use cb_core::messaging::OutgoingMessage;
use cb_core::ports::{MessengerPort, SettingsStorePort};
use cb_core::wizard::{messages, ClearField};

pub struct ClearSettings {
    settings: Arc<dyn SettingsStorePort>,
    messenger: Arc<dyn MessengerPort>,
}

impl ClearSettings {
    pub fn new(settings: Arc<dyn SettingsStorePort>, messenger: Arc<dyn MessengerPort>) -> Self {
        Self {
            settings,
            messenger,
        }
    }

    /// `/clear_prefix` and friends. Same reset the wizard button does.
    pub async fn clear_field(&self, user: UserId, chat: ChatId, field: ClearField) -> Result<()> {
        let mut record = self.settings.get(user).await?;
        field.apply(&mut record);
        self.settings.put(user, &record).await?;
        self.messenger
            .send_message(chat, &OutgoingMessage::plain(messages::field_cleared(field)))
            .await?;
        Ok(())
    }
}
