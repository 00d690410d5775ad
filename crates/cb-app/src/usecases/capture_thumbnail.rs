//! Thumbnail capture, display and removal.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cb_core::ids::{ChatId, MediaRef, UserId};
use cb_core::messaging::OutgoingMessage;
use cb_core::ports::{MessengerPort, ThumbnailStorePort};

use crate::messages;

const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

pub struct CaptureThumbnail {
    thumbs: Arc<dyn ThumbnailStorePort>,
    messenger: Arc<dyn MessengerPort>,
}

impl CaptureThumbnail {
    pub fn new(thumbs: Arc<dyn ThumbnailStorePort>, messenger: Arc<dyn MessengerPort>) -> Self {
        Self { thumbs, messenger }
    }

    /// Saves a photo message as the user's thumbnail.
    pub async fn save_photo(&self, user: UserId, chat: ChatId, photo: MediaRef) -> Result<()> {
        self.thumbs.put(user, &photo).await?;
        info!(%user, "thumbnail saved from photo");
        self.messenger
            .send_message(chat, &OutgoingMessage::plain(messages::THUMB_SAVED))
            .await?;
        Ok(())
    }

    /// Saves a bare image URL sent as text. Returns `false` when the text
    /// is not one, so the caller can keep interpreting the message.
    pub async fn try_save_url(&self, user: UserId, chat: ChatId, text: &str) -> Result<bool> {
        let trimmed = text.trim();
        if !looks_like_image_url(trimmed) {
            return Ok(false);
        }
        self.thumbs.put(user, &MediaRef::from(trimmed)).await?;
        info!(%user, "thumbnail saved from URL");
        self.messenger
            .send_message(chat, &OutgoingMessage::plain(messages::THUMB_SAVED_URL))
            .await?;
        Ok(true)
    }

    /// `/thumb`: echoes the saved thumbnail back, or says there is none.
    pub async fn show(&self, user: UserId, chat: ChatId) -> Result<()> {
        match self.thumbs.get(user).await? {
            Some(media) => {
                self.messenger.send_photo(chat, &media, None).await?;
            }
            None => {
                self.messenger
                    .send_message(chat, &OutgoingMessage::plain(messages::THUMB_NONE))
                    .await?;
            }
        }
        Ok(())
    }

    /// `/clear_thumb`.
    pub async fn clear(&self, user: UserId, chat: ChatId) -> Result<()> {
        self.thumbs.clear(user).await?;
        self.messenger
            .send_message(chat, &OutgoingMessage::plain(messages::THUMB_CLEARED))
            .await?;
        Ok(())
    }
}

/// A whole message that is nothing but an http(s) URL whose path ends in a
/// raster image extension. Query strings and fragments are ignored.
fn looks_like_image_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return false;
    }
    if text.contains(char::is_whitespace) {
        return false;
    }
    let path = lower.split(['?', '#']).next().unwrap_or(&lower);
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
