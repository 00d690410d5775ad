//! Transport-neutral inbound chat events.
//!
//! The transport adapter converts wire updates into these before they reach
//! the application router, so routing logic never sees wire types.

use crate::ids::{ChatId, MediaRef, MessageId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Plain text message.
    Text {
        user: UserId,
        chat: ChatId,
        text: String,
    },
    /// Slash command with its argument tail.
    Command {
        user: UserId,
        chat: ChatId,
        name: String,
        args: String,
    },
    /// Inline keyboard button press.
    ButtonPress {
        user: UserId,
        chat: ChatId,
        message: MessageId,
        callback_id: String,
        data: String,
    },
    /// Photo message; only the largest size is carried.
    Photo {
        user: UserId,
        chat: ChatId,
        largest: MediaRef,
    },
    /// Video or document message.
    Media {
        user: UserId,
        chat: ChatId,
        media: IncomingMedia,
    },
    /// Message forwarded from a channel into the private chat.
    ChannelForward {
        user: UserId,
        chat: ChatId,
        channel: ChatId,
        title: String,
    },
}

impl ChatEvent {
    pub fn user(&self) -> UserId {
        match self {
            ChatEvent::Text { user, .. }
            | ChatEvent::Command { user, .. }
            | ChatEvent::ButtonPress { user, .. }
            | ChatEvent::Photo { user, .. }
            | ChatEvent::Media { user, .. }
            | ChatEvent::ChannelForward { user, .. } => *user,
        }
    }
}

/// Relayable media attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMedia {
    pub kind: MediaKind,
    pub file: MediaRef,
    /// Message carrying the media, needed to copy it elsewhere.
    pub message: MessageId,
    pub caption: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Document,
}
