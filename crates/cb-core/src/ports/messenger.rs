use async_trait::async_trait;

use crate::ids::{ChatId, MediaRef, MessageId};
use crate::messaging::outgoing::OutgoingMessage;

/// Outbound messaging operations the application layer depends on.
///
/// Implementations translate [`OutgoingMessage`] into whatever the wire
/// wants. Delivery failures surface as errors; the caller decides whether
/// they are fatal.
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Sends a new message and returns its id.
    async fn send_message(&self, chat: ChatId, message: &OutgoingMessage)
        -> anyhow::Result<MessageId>;

    /// Edits an existing message in place, text and keyboard together.
    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        content: &OutgoingMessage,
    ) -> anyhow::Result<()>;

    /// Acknowledges a button press so the client stops its spinner.
    async fn ack_button(&self, callback_id: &str, text: Option<&str>) -> anyhow::Result<()>;

    /// Sends a photo with an optional caption.
    async fn send_photo(
        &self,
        chat: ChatId,
        photo: &MediaRef,
        caption: Option<&OutgoingMessage>,
    ) -> anyhow::Result<MessageId>;

    /// Sends a video with a caption, an optional thumbnail and the caption's
    /// keyboard attached.
    async fn send_video(
        &self,
        chat: ChatId,
        video: &MediaRef,
        caption: &OutgoingMessage,
        thumbnail: Option<&MediaRef>,
    ) -> anyhow::Result<MessageId>;

    /// Copies a message into another chat with a replacement caption.
    async fn copy_message(
        &self,
        to: ChatId,
        from: ChatId,
        message: MessageId,
        caption: &OutgoingMessage,
    ) -> anyhow::Result<MessageId>;
}
