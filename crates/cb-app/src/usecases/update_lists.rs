//! Word-list edits and the cleanup master switch, issued as commands.

use std::sync::Arc;

use anyhow::Result;

use cb_core::ids::{ChatId, UserId};
use cb_core::messaging::OutgoingMessage;
use cb_core::ports::{MessengerPort, SettingsStorePort};
use cb_core::settings::input::{parse_removal_list, parse_replace_pairs};
use cb_core::wizard::messages as wizard_messages;

use crate::messages;

pub struct UpdateLists {
    settings: Arc<dyn SettingsStorePort>,
    messenger: Arc<dyn MessengerPort>,
}

impl UpdateLists {
    pub fn new(settings: Arc<dyn SettingsStorePort>, messenger: Arc<dyn MessengerPort>) -> Self {
        Self {
            settings,
            messenger,
        }
    }

    /// `/replace_words old - new, old - new`
    pub async fn set_replacements(&self, user: UserId, chat: ChatId, args: &str) -> Result<()> {
        if args.trim().is_empty() {
            return self.reply(chat, messages::REPLACE_USAGE).await;
        }
        let mut record = self.settings.get(user).await?;
        record.replacements = parse_replace_pairs(args);
        self.settings.put(user, &record).await?;
        self.reply(chat, &wizard_messages::replacements_saved(record.replacements.len()))
            .await
    }

    /// `/remove_words word, word`
    pub async fn set_removals(&self, user: UserId, chat: ChatId, args: &str) -> Result<()> {
        if args.trim().is_empty() {
            return self.reply(chat, messages::REMOVE_USAGE).await;
        }
        let mut record = self.settings.get(user).await?;
        record.removals = parse_removal_list(args);
        self.settings.put(user, &record).await?;
        self.reply(chat, &wizard_messages::removals_saved(record.removals.len()))
            .await
    }

    /// `/toggle_auto_remove`: all three cleanup switches as one master
    /// toggle. Any switch on means the group turns off; otherwise all on.
    pub async fn toggle_auto_remove(&self, user: UserId, chat: ChatId) -> Result<()> {
        let mut record = self.settings.get(user).await?;
        let enable = !record.auto_clean_enabled();
        record.auto_remove_links = enable;
        record.auto_remove_usernames = enable;
        record.auto_remove_extension_tail = enable;
        self.settings.put(user, &record).await?;
        self.reply(chat, &messages::auto_clean_switched(enable)).await
    }

    async fn reply(&self, chat: ChatId, text: &str) -> Result<()> {
        self.messenger
            .send_message(chat, &OutgoingMessage::plain(text))
            .await?;
        Ok(())
    }
}
