//! Outbound gateway: [`MessengerPort`] over the Bot API client.
//! 出站网关，把领域层消息翻译成 Bot API 请求。
//!
//! Media always travels by file id or URL; this process never holds the
//! bytes.

use std::sync::Arc;

use async_trait::async_trait;

use cb_core::ids::{ChatId, MediaRef, MessageId};
use cb_core::messaging::{InlineButton, InlineKeyboard, OutgoingMessage, TextMarkup};
use cb_core::ports::MessengerPort;

use crate::api::client::BotApiClient;
use crate::api::types::{
    AnswerCallbackQueryRequest, CopyMessageRequest, EditMessageTextRequest, InlineKeyboardButton,
    InlineKeyboardMarkup, Message, MessageIdResult, SendMessageRequest, SendPhotoRequest,
    SendVideoRequest, PARSE_MODE_HTML,
};

pub struct TelegramGateway {
    client: Arc<BotApiClient>,
}

impl TelegramGateway {
    pub fn new(client: Arc<BotApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessengerPort for TelegramGateway {
    async fn send_message(
        &self,
        chat: ChatId,
        message: &OutgoingMessage,
    ) -> anyhow::Result<MessageId> {
        let request = SendMessageRequest {
            chat_id: chat.value(),
            text: message.text.clone(),
            parse_mode: parse_mode_for(message.markup),
            reply_markup: message.keyboard.as_ref().map(markup_for),
        };
        let sent: Message = self.client.call("sendMessage", &request).await?;
        Ok(MessageId::new(sent.message_id))
    }

    async fn edit_message(
        &self,
        chat: ChatId,
        message: MessageId,
        content: &OutgoingMessage,
    ) -> anyhow::Result<()> {
        let request = EditMessageTextRequest {
            chat_id: chat.value(),
            message_id: message.value(),
            text: content.text.clone(),
            parse_mode: parse_mode_for(content.markup),
            reply_markup: content.keyboard.as_ref().map(markup_for),
        };
        match self.client.call::<_, Message>("editMessageText", &request).await {
            Ok(_) => Ok(()),
            // Re-rendering an unchanged menu is a no-op, not a failure;
            // surfacing it would make the caller post a duplicate menu.
            Err(err) if err.is_not_modified() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn ack_button(&self, callback_id: &str, text: Option<&str>) -> anyhow::Result<()> {
        let request = AnswerCallbackQueryRequest {
            callback_query_id: callback_id.to_string(),
            text: text.map(str::to_string),
        };
        let _: bool = self.client.call("answerCallbackQuery", &request).await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: ChatId,
        photo: &MediaRef,
        caption: Option<&OutgoingMessage>,
    ) -> anyhow::Result<MessageId> {
        let request = SendPhotoRequest {
            chat_id: chat.value(),
            photo: photo.as_str().to_string(),
            caption: caption.map(|c| c.text.clone()),
            parse_mode: caption.and_then(|c| parse_mode_for(c.markup)),
            reply_markup: caption.and_then(|c| c.keyboard.as_ref()).map(markup_for),
        };
        let sent: Message = self.client.call("sendPhoto", &request).await?;
        Ok(MessageId::new(sent.message_id))
    }

    async fn send_video(
        &self,
        chat: ChatId,
        video: &MediaRef,
        caption: &OutgoingMessage,
        thumbnail: Option<&MediaRef>,
    ) -> anyhow::Result<MessageId> {
        let request = SendVideoRequest {
            chat_id: chat.value(),
            video: video.as_str().to_string(),
            caption: caption_text(caption),
            parse_mode: parse_mode_for(caption.markup),
            thumbnail: thumbnail.map(|t| t.as_str().to_string()),
            reply_markup: caption.keyboard.as_ref().map(markup_for),
        };
        let sent: Message = self.client.call("sendVideo", &request).await?;
        Ok(MessageId::new(sent.message_id))
    }

    async fn copy_message(
        &self,
        to: ChatId,
        from: ChatId,
        message: MessageId,
        caption: &OutgoingMessage,
    ) -> anyhow::Result<MessageId> {
        let request = CopyMessageRequest {
            chat_id: to.value(),
            from_chat_id: from.value(),
            message_id: message.value(),
            caption: caption_text(caption),
            parse_mode: parse_mode_for(caption.markup),
            reply_markup: caption.keyboard.as_ref().map(markup_for),
        };
        let copied: MessageIdResult = self.client.call("copyMessage", &request).await?;
        Ok(MessageId::new(copied.message_id))
    }
}

fn parse_mode_for(markup: TextMarkup) -> Option<&'static str> {
    match markup {
        TextMarkup::Plain => None,
        TextMarkup::Html => Some(PARSE_MODE_HTML),
    }
}

/// An empty caption stays off the wire entirely.
fn caption_text(caption: &OutgoingMessage) -> Option<String> {
    if caption.text.is_empty() {
        None
    } else {
        Some(caption.text.clone())
    }
}

fn markup_for(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(button_for).collect())
            .collect(),
    }
}

fn button_for(button: &InlineButton) -> InlineKeyboardButton {
    match button {
        InlineButton::Callback { label, data } => InlineKeyboardButton {
            text: label.clone(),
            callback_data: Some(data.clone()),
            url: None,
        },
        InlineButton::Url { label, url } => InlineKeyboardButton {
            text: label.clone(),
            callback_data: None,
            url: Some(url.clone()),
        },
    }
}
