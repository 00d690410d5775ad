//! Hand-rolled port fakes shared by the use-case tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use cb_core::ids::{ChatId, MediaRef, MessageId, UserId};
use cb_core::messaging::OutgoingMessage;
use cb_core::ports::{MessengerPort, ThumbnailStorePort};

/// One observed messenger call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Sent {
    Message {
        chat: ChatId,
        message: OutgoingMessage,
    },
    Edit {
        chat: ChatId,
        id: MessageId,
        message: OutgoingMessage,
    },
    Ack {
        callback_id: String,
    },
    Photo {
        chat: ChatId,
        photo: MediaRef,
        caption: Option<OutgoingMessage>,
    },
    Video {
        chat: ChatId,
        video: MediaRef,
        caption: OutgoingMessage,
        thumbnail: Option<MediaRef>,
    },
    Copy {
        to: ChatId,
        from: ChatId,
        message: MessageId,
        caption: OutgoingMessage,
    },
}

/// Messenger fake that records every call and hands out increasing ids.
#[derive(Default)]
pub(crate) struct RecordingMessenger {
    calls: Mutex<Vec<Sent>>,
    next_id: AtomicI64,
    pub(crate) fail_edits: AtomicBool,
    pub(crate) fail_video: AtomicBool,
    pub(crate) fail_copy_to: Mutex<Option<ChatId>>,
}

impl RecordingMessenger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sent(&self) -> Vec<Sent> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of plain `send_message` calls, in order.
    pub(crate) fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|call| match call {
                Sent::Message { message, .. } => Some(message.text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Sent) {
        self.calls.lock().unwrap().push(call);
    }

    fn next(&self) -> MessageId {
        MessageId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl MessengerPort for RecordingMessenger {
    async fn send_message(
        &self,
        chat: ChatId,
        message: &OutgoingMessage,
    ) -> anyhow::Result<MessageId> {
        self.record(Sent::Message {
            chat,
            message: message.clone(),
        });
        Ok(self.next())
    }

    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        content: &OutgoingMessage,
    ) -> anyhow::Result<()> {
        if self.fail_edits.load(Ordering::SeqCst) {
            anyhow::bail!("edit rejected");
        }
        self.record(Sent::Edit {
            chat,
            id: message,
            message: content.clone(),
        });
        Ok(())
    }

    async fn ack_button(&self, callback_id: &str, _text: Option<&str>) -> anyhow::Result<()> {
        self.record(Sent::Ack {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: ChatId,
        photo: &MediaRef,
        caption: Option<&OutgoingMessage>,
    ) -> anyhow::Result<MessageId> {
        self.record(Sent::Photo {
            chat,
            photo: photo.clone(),
            caption: caption.cloned(),
        });
        Ok(self.next())
    }

    async fn send_video(
        &self,
        chat: ChatId,
        video: &MediaRef,
        caption: &OutgoingMessage,
        thumbnail: Option<&MediaRef>,
    ) -> anyhow::Result<MessageId> {
        if self.fail_video.load(Ordering::SeqCst) {
            anyhow::bail!("video rejected");
        }
        self.record(Sent::Video {
            chat,
            video: video.clone(),
            caption: caption.clone(),
            thumbnail: thumbnail.cloned(),
        });
        Ok(self.next())
    }

    async fn copy_message(
        &self,
        to: ChatId,
        from: ChatId,
        message: MessageId,
        caption: &OutgoingMessage,
    ) -> anyhow::Result<MessageId> {
        if *self.fail_copy_to.lock().unwrap() == Some(to) {
            anyhow::bail!("copy rejected");
        }
        self.record(Sent::Copy {
            to,
            from,
            message,
            caption: caption.clone(),
        });
        Ok(self.next())
    }
}

/// Thumbnail store fake backed by a plain map.
#[derive(Default)]
pub(crate) struct FakeThumbnailStore {
    inner: Mutex<HashMap<UserId, MediaRef>>,
}

impl FakeThumbnailStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(user: UserId, media: MediaRef) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().insert(user, media);
        store
    }
}

#[async_trait]
impl ThumbnailStorePort for FakeThumbnailStore {
    async fn get(&self, user: UserId) -> anyhow::Result<Option<MediaRef>> {
        Ok(self.inner.lock().unwrap().get(&user).cloned())
    }

    async fn put(&self, user: UserId, media: &MediaRef) -> anyhow::Result<()> {
        self.inner.lock().unwrap().insert(user, media.clone());
        Ok(())
    }

    async fn clear(&self, user: UserId) -> anyhow::Result<()> {
        self.inner.lock().unwrap().remove(&user);
        Ok(())
    }
}
