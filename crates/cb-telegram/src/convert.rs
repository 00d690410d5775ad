//! Converts wire updates into transport-neutral chat events.
//!
//! Pure functions; anything the bot has no use for converts to `None`
//! and is dropped by the poll loop. Only private-chat traffic with a
//! sender maps to an event.

use cb_core::ids::{ChatId, MediaRef, MessageId, UserId};
use cb_core::messaging::{ChatEvent, IncomingMedia, MediaKind};

use crate::api::types::{CallbackQuery, Message, PhotoSize, Update};

/// Maps one update to at most one event.
pub fn chat_event(update: Update) -> Option<ChatEvent> {
    if let Some(query) = update.callback_query {
        return button_press(query);
    }
    if let Some(message) = update.message {
        return message_event(message);
    }
    // Channel posts are plain broadcasts; nothing in the bot routes on them.
    None
}

fn button_press(query: CallbackQuery) -> Option<ChatEvent> {
    let message = query.message?;
    Some(ChatEvent::ButtonPress {
        user: UserId::new(query.from.id),
        chat: ChatId::new(message.chat.id),
        message: MessageId::new(message.message_id),
        callback_id: query.id,
        data: query.data.unwrap_or_default(),
    })
}

fn message_event(message: Message) -> Option<ChatEvent> {
    let user = UserId::new(message.from.as_ref()?.id);
    let chat = ChatId::new(message.chat.id);

    // A channel forward outranks whatever media the forwarded post
    // carries; the dump-target capture must see it. Forwards from users
    // keep their media path.
    if let Some(origin) = &message.forward_origin {
        if origin.kind == "channel" {
            if let Some(channel) = &origin.chat {
                return Some(ChatEvent::ChannelForward {
                    user,
                    chat,
                    channel: ChatId::new(channel.id),
                    title: channel.title.clone().unwrap_or_default(),
                });
            }
        }
    }

    if let Some(video) = message.video {
        return Some(ChatEvent::Media {
            user,
            chat,
            media: IncomingMedia {
                kind: MediaKind::Video,
                file: MediaRef::new(video.file_id),
                message: MessageId::new(message.message_id),
                caption: message.caption,
                file_name: video.file_name,
                mime_type: video.mime_type,
            },
        });
    }

    if let Some(document) = message.document {
        return Some(ChatEvent::Media {
            user,
            chat,
            media: IncomingMedia {
                kind: MediaKind::Document,
                file: MediaRef::new(document.file_id),
                message: MessageId::new(message.message_id),
                caption: message.caption,
                file_name: document.file_name,
                mime_type: document.mime_type,
            },
        });
    }

    if let Some(sizes) = message.photo {
        let largest = largest_photo(sizes)?;
        return Some(ChatEvent::Photo {
            user,
            chat,
            largest: MediaRef::new(largest.file_id),
        });
    }

    let text = message.text?;
    match parse_command(&text) {
        Some((name, args)) => Some(ChatEvent::Command {
            user,
            chat,
            name,
            args,
        }),
        None => Some(ChatEvent::Text { user, chat, text }),
    }
}

fn largest_photo(sizes: Vec<PhotoSize>) -> Option<PhotoSize> {
    sizes
        .into_iter()
        .max_by_key(|size| u64::from(size.width) * u64::from(size.height))
}

/// Splits `/name[@botname] args…` into a lowercase name and its argument
/// tail. Returns `None` when the text is not a command.
fn parse_command(text: &str) -> Option<(String, String)> {
    let rest = text.trim().strip_prefix('/')?;
    let (head, args) = match rest.split_once(char::is_whitespace) {
        Some((head, args)) => (head, args.trim()),
        None => (rest, ""),
    };
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
        return None;
    }
    Some((name.to_ascii_lowercase(), args.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(raw: serde_json::Value) -> Update {
        serde_json::from_value(raw).unwrap()
    }

    fn private_message(body: serde_json::Value) -> serde_json::Value {
        let mut message = json!({
            "message_id": 42,
            "from": { "id": 9, "is_bot": false, "first_name": "Ada" },
            "date": 1735689600,
            "chat": { "id": 9, "type": "private" }
        });
        message
            .as_object_mut()
            .unwrap()
            .extend(body.as_object().unwrap().clone());
        json!({ "update_id": 1, "message": message })
    }

    #[test]
    fn command_with_bot_suffix_and_args() {
        let event = chat_event(update(private_message(
            json!({ "text": "/replace_words@CaptionBot x265 - HEVC" }),
        )))
        .unwrap();

        match event {
            ChatEvent::Command { name, args, .. } => {
                assert_eq!(name, "replace_words");
                assert_eq!(args, "x265 - HEVC");
            }
            other => panic!("expected a command, got {other:?}"),
        }
    }

    #[test]
    fn uppercase_command_is_normalized() {
        let event =
            chat_event(update(private_message(json!({ "text": "/START" })))).unwrap();
        assert!(matches!(event, ChatEvent::Command { name, .. } if name == "start"));
    }

    #[test]
    fn bare_slash_stays_plain_text() {
        let event = chat_event(update(private_message(json!({ "text": "/" })))).unwrap();
        assert!(matches!(event, ChatEvent::Text { text, .. } if text == "/"));
    }

    #[test]
    fn plain_text_maps_to_text() {
        let event =
            chat_event(update(private_message(json!({ "text": "hello" })))).unwrap();
        match event {
            ChatEvent::Text { user, text, .. } => {
                assert_eq!(user, UserId::new(9));
                assert_eq!(text, "hello");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn photo_keeps_only_the_largest_size() {
        let event = chat_event(update(private_message(json!({
            "photo": [
                { "file_id": "small", "file_unique_id": "u1", "width": 90, "height": 51 },
                { "file_id": "big", "file_unique_id": "u2", "width": 1280, "height": 720 },
                { "file_id": "mid", "file_unique_id": "u3", "width": 320, "height": 180 }
            ]
        }))))
        .unwrap();

        assert!(matches!(
            event,
            ChatEvent::Photo { largest, .. } if largest == MediaRef::from("big")
        ));
    }

    #[test]
    fn video_carries_caption_name_and_mime() {
        let event = chat_event(update(private_message(json!({
            "caption": "Ep 04",
            "video": {
                "file_id": "vid-1", "file_unique_id": "u1",
                "width": 1920, "height": 1080, "duration": 1380,
                "file_name": "ep04.mkv", "mime_type": "video/x-matroska"
            }
        }))))
        .unwrap();

        match event {
            ChatEvent::Media { media, .. } => {
                assert_eq!(media.kind, MediaKind::Video);
                assert_eq!(media.file, MediaRef::from("vid-1"));
                assert_eq!(media.message, MessageId::new(42));
                assert_eq!(media.caption.as_deref(), Some("Ep 04"));
                assert_eq!(media.file_name.as_deref(), Some("ep04.mkv"));
            }
            other => panic!("expected media, got {other:?}"),
        }
    }

    #[test]
    fn document_maps_to_document_media() {
        let event = chat_event(update(private_message(json!({
            "document": {
                "file_id": "doc-1", "file_unique_id": "u1",
                "file_name": "ep04.mkv", "mime_type": "video/x-matroska"
            }
        }))))
        .unwrap();

        assert!(matches!(
            event,
            ChatEvent::Media { media, .. } if media.kind == MediaKind::Document
        ));
    }

    #[test]
    fn channel_forward_wins_over_forwarded_media() {
        let event = chat_event(update(private_message(json!({
            "forward_origin": {
                "type": "channel",
                "chat": { "id": -1002, "type": "channel", "title": "Dump" },
                "message_id": 7
            },
            "video": {
                "file_id": "vid-1", "file_unique_id": "u1",
                "width": 1920, "height": 1080, "duration": 1380
            }
        }))))
        .unwrap();

        match event {
            ChatEvent::ChannelForward { channel, title, .. } => {
                assert_eq!(channel, ChatId::new(-1002));
                assert_eq!(title, "Dump");
            }
            other => panic!("expected a channel forward, got {other:?}"),
        }
    }

    #[test]
    fn forward_from_a_user_keeps_the_media_path() {
        let event = chat_event(update(private_message(json!({
            "forward_origin": {
                "type": "user",
                "sender_user": { "id": 5, "is_bot": false, "first_name": "Bea" }
            },
            "video": {
                "file_id": "vid-1", "file_unique_id": "u1",
                "width": 1920, "height": 1080, "duration": 1380
            }
        }))))
        .unwrap();

        assert!(matches!(event, ChatEvent::Media { .. }));
    }

    #[test]
    fn button_press_carries_callback_and_menu_message() {
        let event = chat_event(update(json!({
            "update_id": 2,
            "callback_query": {
                "id": "cb-77",
                "from": { "id": 9, "is_bot": false, "first_name": "Ada" },
                "message": {
                    "message_id": 43,
                    "date": 1735689601,
                    "chat": { "id": 9, "type": "private" }
                },
                "data": "style:bold"
            }
        })))
        .unwrap();

        match event {
            ChatEvent::ButtonPress {
                message,
                callback_id,
                data,
                ..
            } => {
                assert_eq!(message, MessageId::new(43));
                assert_eq!(callback_id, "cb-77");
                assert_eq!(data, "style:bold");
            }
            other => panic!("expected a button press, got {other:?}"),
        }
    }

    #[test]
    fn callback_without_message_is_dropped() {
        let event = chat_event(update(json!({
            "update_id": 3,
            "callback_query": {
                "id": "cb-78",
                "from": { "id": 9, "is_bot": false, "first_name": "Ada" },
                "data": "nav:page1"
            }
        })));
        assert!(event.is_none());
    }

    #[test]
    fn message_without_sender_is_dropped() {
        let event = chat_event(update(json!({
            "update_id": 4,
            "message": {
                "message_id": 50,
                "date": 1735689600,
                "chat": { "id": -100, "type": "channel" },
                "text": "broadcast"
            }
        })));
        assert!(event.is_none());
    }

    #[test]
    fn channel_post_update_is_dropped() {
        let event = chat_event(update(json!({
            "update_id": 5,
            "channel_post": {
                "message_id": 51,
                "date": 1735689600,
                "chat": { "id": -100, "type": "channel" },
                "text": "broadcast"
            }
        })));
        assert!(event.is_none());
    }
}
