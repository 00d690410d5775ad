//! `/preview` outside the wizard.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info_span, Instrument};

use cb_core::ids::{ChatId, UserId};
use cb_core::ports::{MessengerPort, SettingsStorePort};
use cb_core::wizard::render;

pub struct PreviewCaption {
    settings: Arc<dyn SettingsStorePort>,
    messenger: Arc<dyn MessengerPort>,
}

impl PreviewCaption {
    pub fn new(settings: Arc<dyn SettingsStorePort>, messenger: Arc<dyn MessengerPort>) -> Self {
        Self {
            settings,
            messenger,
        }
    }

    pub async fn execute(&self, user: UserId, chat: ChatId) -> Result<()> {
        let span = info_span!("usecase.preview_caption.execute", %user);

        async {
            let record = self.settings.get(user).await?;
            self.messenger
                .send_message(chat, &render::render_preview(&record))
                .await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}
