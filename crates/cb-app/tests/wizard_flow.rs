//! Full settings sessions driven through the router, with a real in-memory
//! settings store behind it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cb_app::{AppDeps, EventRouter};
use cb_core::ids::{ChatId, MediaRef, MessageId, UserId};
use cb_core::messaging::{ChatEvent, OutgoingMessage};
use cb_core::ports::{
    ChatEventHandlerPort, MessengerPort, SettingsStorePort, ThumbnailStorePort,
};
use cb_core::settings::{CaptionStyle, RemovalMatch};
use cb_infra::InMemorySettingsStore;

const USER: UserId = UserId::new(7);
const CHAT: ChatId = ChatId::new(7);

/// Messenger that logs outgoing traffic as flat strings. Media methods are
/// out of scope for wizard flows.
#[derive(Default)]
struct LoggingMessenger {
    log: Mutex<Vec<String>>,
    next_id: AtomicI64,
}

impl LoggingMessenger {
    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessengerPort for LoggingMessenger {
    async fn send_message(
        &self,
        _chat: ChatId,
        message: &OutgoingMessage,
    ) -> anyhow::Result<MessageId> {
        self.log
            .lock()
            .unwrap()
            .push(format!("send: {}", message.text));
        Ok(MessageId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn edit_message(
        &self,
        _chat: ChatId,
        message: MessageId,
        content: &OutgoingMessage,
    ) -> anyhow::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("edit {}: {}", message, content.text));
        Ok(())
    }

    async fn ack_button(&self, _callback_id: &str, _text: Option<&str>) -> anyhow::Result<()> {
        Ok(())
    }

    async fn send_photo(
        &self,
        _chat: ChatId,
        _photo: &MediaRef,
        _caption: Option<&OutgoingMessage>,
    ) -> anyhow::Result<MessageId> {
        unimplemented!()
    }

    async fn send_video(
        &self,
        _chat: ChatId,
        _video: &MediaRef,
        _caption: &OutgoingMessage,
        _thumbnail: Option<&MediaRef>,
    ) -> anyhow::Result<MessageId> {
        unimplemented!()
    }

    async fn copy_message(
        &self,
        _to: ChatId,
        _from: ChatId,
        _message: MessageId,
        _caption: &OutgoingMessage,
    ) -> anyhow::Result<MessageId> {
        unimplemented!()
    }
}

#[derive(Default)]
struct NoThumbnails;

#[async_trait]
impl ThumbnailStorePort for NoThumbnails {
    async fn get(&self, _user: UserId) -> anyhow::Result<Option<MediaRef>> {
        Ok(None)
    }

    async fn put(&self, _user: UserId, _media: &MediaRef) -> anyhow::Result<()> {
        Ok(())
    }

    async fn clear(&self, _user: UserId) -> anyhow::Result<()> {
        Ok(())
    }
}

fn router_over(store: Arc<InMemorySettingsStore>) -> (EventRouter, Arc<LoggingMessenger>) {
    let messenger = Arc::new(LoggingMessenger::default());
    let router = EventRouter::new(AppDeps {
        settings: store,
        thumbs: Arc::new(NoThumbnails),
        messenger: messenger.clone(),
    });
    (router, messenger)
}

fn command(name: &str) -> ChatEvent {
    ChatEvent::Command {
        user: USER,
        chat: CHAT,
        name: name.to_string(),
        args: String::new(),
    }
}

fn text(body: &str) -> ChatEvent {
    ChatEvent::Text {
        user: USER,
        chat: CHAT,
        text: body.to_string(),
    }
}

fn press(message: i64, data: &str) -> ChatEvent {
    ChatEvent::ButtonPress {
        user: USER,
        chat: CHAT,
        message: MessageId::new(message),
        callback_id: "cb".to_string(),
        data: data.to_string(),
    }
}

#[tokio::test]
async fn a_whole_settings_session_lands_in_the_store() {
    let store = Arc::new(InMemorySettingsStore::new());
    let (router, _messenger) = router_over(store.clone());

    router.handle(command("settings")).await.unwrap();
    router.handle(press(1, "style:bold")).await.unwrap();
    router.handle(press(1, "nav:page2")).await.unwrap();
    router.handle(press(1, "toggle:auto_links")).await.unwrap();
    router.handle(press(1, "toggle:removal_match")).await.unwrap();
    router.handle(press(1, "set:removals")).await.unwrap();
    router.handle(text("hd, 2025")).await.unwrap();
    router.handle(press(1, "nav:page3")).await.unwrap();
    router.handle(press(1, "set:prefix")).await.unwrap();
    router.handle(text("[Grab]")).await.unwrap();
    router.handle(press(1, "action:done")).await.unwrap();

    let record = store.get(USER).await.unwrap();
    assert!(record.styles.contains(CaptionStyle::Bold));
    assert!(record.auto_remove_links);
    assert_eq!(record.removal_match, RemovalMatch::WholeWord);
    assert_eq!(record.removals, vec!["hd", "2025"]);
    assert_eq!(record.prefix, "[Grab]");

    // The dialog is closed: stray text no longer lands anywhere.
    router.handle(text("stray")).await.unwrap();
    assert_eq!(store.get(USER).await.unwrap().prefix, "[Grab]");
}

#[tokio::test]
async fn menus_survive_a_restart_of_the_router() {
    let store = Arc::new(InMemorySettingsStore::new());

    let (router, _messenger) = router_over(store.clone());
    router.handle(command("settings")).await.unwrap();
    router.handle(press(1, "style:italic")).await.unwrap();
    drop(router);

    // New router: in-memory sessions are gone, the stored record is not.
    // The user keeps pressing buttons on the old menu message.
    let (router, messenger) = router_over(store.clone());
    router.handle(press(1, "style:spoiler")).await.unwrap();

    let record = store.get(USER).await.unwrap();
    assert!(record.styles.contains(CaptionStyle::Italic));
    assert!(record.styles.contains(CaptionStyle::Spoiler));

    // The press re-rendered onto the old message instead of a new one.
    let log = messenger.log();
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("edit 1:"));
}

#[tokio::test]
async fn two_users_get_independent_dialogs() {
    let store = Arc::new(InMemorySettingsStore::new());
    let (router, _messenger) = router_over(store.clone());
    let other = UserId::new(8);

    router.handle(command("settings")).await.unwrap();
    router
        .handle(ChatEvent::Command {
            user: other,
            chat: ChatId::new(8),
            name: "settings".to_string(),
            args: String::new(),
        })
        .await
        .unwrap();

    // First user edits the prefix; second user's text stays free.
    router.handle(press(1, "set:prefix")).await.unwrap();
    router
        .handle(ChatEvent::Text {
            user: other,
            chat: ChatId::new(8),
            text: "not a prefix".to_string(),
        })
        .await
        .unwrap();
    router.handle(text("[One]")).await.unwrap();

    assert_eq!(store.get(USER).await.unwrap().prefix, "[One]");
    assert_eq!(store.get(other).await.unwrap().prefix, "");
}
