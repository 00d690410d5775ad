//! Relays incoming media back with the composed caption.
//!
//! Videos go out through `send_video` so the saved thumbnail can be
//! attached; video files sent as documents are copied instead, which keeps
//! the original bytes untouched. Anything that is not a video is left alone.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, warn, Instrument};

use cb_core::caption::{compose, extension};
use cb_core::ids::{ChatId, UserId};
use cb_core::messaging::{IncomingMedia, InlineKeyboard, MediaKind, OutgoingMessage};
use cb_core::ports::{MessengerPort, SettingsStorePort, ThumbnailStorePort};
use cb_core::settings::Settings;

use crate::messages;

pub struct RelayMedia {
    settings: Arc<dyn SettingsStorePort>,
    thumbs: Arc<dyn ThumbnailStorePort>,
    messenger: Arc<dyn MessengerPort>,
}

impl RelayMedia {
    pub fn new(
        settings: Arc<dyn SettingsStorePort>,
        thumbs: Arc<dyn ThumbnailStorePort>,
        messenger: Arc<dyn MessengerPort>,
    ) -> Self {
        Self {
            settings,
            thumbs,
            messenger,
        }
    }

    pub async fn execute(&self, user: UserId, chat: ChatId, media: IncomingMedia) -> Result<()> {
        let span = info_span!("usecase.relay_media.execute", %user);

        async {
            let record = self.settings.get(user).await?;

            if !is_video(&media) {
                self.messenger
                    .send_message(chat, &OutgoingMessage::plain(messages::NOT_A_VIDEO_HINT))
                    .await?;
                return Ok(());
            }

            let caption = build_caption(&record, &media);

            let sent = match media.kind {
                MediaKind::Video => {
                    let thumbnail = self.thumbs.get(user).await?;
                    self.messenger
                        .send_video(chat, &media.file, &caption, thumbnail.as_ref())
                        .await
                }
                MediaKind::Document => {
                    self.messenger
                        .copy_message(chat, chat, media.message, &caption)
                        .await
                }
            };

            let sent = match sent {
                Ok(id) => id,
                Err(err) => {
                    warn!(error = %err, "media relay failed");
                    self.messenger
                        .send_message(chat, &OutgoingMessage::plain(messages::RELAY_FAILED))
                        .await?;
                    return Ok(());
                }
            };
            info!(message = %sent, "relayed media with composed caption");

            if let Some(dump) = record.dump_channel_id {
                // The user's original message is what lands in the dump
                // channel, with the composed caption in place of its own.
                let original = media.message;
                if let Err(err) = self
                    .messenger
                    .copy_message(dump, chat, original, &caption)
                    .await
                {
                    warn!(%dump, error = %err, "dump channel copy failed");
                    self.messenger
                        .send_message(chat, &OutgoingMessage::plain(messages::DUMP_COPY_FAILED))
                        .await?;
                }
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Caption for the relayed copy. Falls back to the file name when the
/// incoming message carried no caption text.
fn build_caption(record: &Settings, media: &IncomingMedia) -> OutgoingMessage {
    let source = media
        .caption
        .as_deref()
        .filter(|caption| !caption.trim().is_empty())
        .or(media.file_name.as_deref())
        .unwrap_or_default();
    let mut text = compose(source, record);
    // Removal rules can eat the whole caption; the file name seeds a second pass.
    if text.is_empty() {
        if let Some(name) = media.file_name.as_deref() {
            text = compose(name, record);
        }
    }
    let mut message = OutgoingMessage::html(text);
    if let Some(button) = &record.button {
        message =
            message.with_keyboard(InlineKeyboard::url_button(&*button.label, &*button.url));
    }
    message
}

fn is_video(media: &IncomingMedia) -> bool {
    match media.kind {
        MediaKind::Video => true,
        MediaKind::Document => {
            media
                .mime_type
                .as_deref()
                .is_some_and(|mime| mime.starts_with("video/"))
                || media
                    .file_name
                    .as_deref()
                    .is_some_and(extension::has_video_extension)
        }
    }
}
