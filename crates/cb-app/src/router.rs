//! Event router: maps transport events onto use cases.
//!
//! 事件路由器。把传输层事件分发到各用例。
//!
//! Free text is tried against interested parties in a fixed order: a
//! waiting wizard prompt first, then the thumbnail URL capture, then it is
//! dropped. Media always goes to the relay.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use cb_core::ids::{ChatId, UserId};
use cb_core::messaging::{ChatEvent, OutgoingMessage};
use cb_core::ports::{ChatEventHandlerPort, MessengerPort};
use cb_core::wizard::{ClearField, EditField, WizardEvent};

use crate::deps::AppDeps;
use crate::messages;
use crate::sessions::{EventGate, SessionRegistry};
use crate::usecases::{
    CaptureThumbnail, ClearSettings, PreviewCaption, RelayMedia, RunWizard, UpdateLists,
};

pub struct EventRouter {
    wizard: RunWizard,
    relay: RelayMedia,
    thumbnails: CaptureThumbnail,
    preview: PreviewCaption,
    clears: ClearSettings,
    lists: UpdateLists,
    messenger: Arc<dyn MessengerPort>,
    // One event per user at a time; the transport fans updates out as tasks.
    gate: EventGate,
}

impl EventRouter {
    pub fn new(deps: AppDeps) -> Self {
        let sessions = Arc::new(SessionRegistry::new());
        Self {
            wizard: RunWizard::new(
                deps.settings.clone(),
                deps.messenger.clone(),
                sessions,
            ),
            relay: RelayMedia::new(
                deps.settings.clone(),
                deps.thumbs.clone(),
                deps.messenger.clone(),
            ),
            thumbnails: CaptureThumbnail::new(deps.thumbs.clone(), deps.messenger.clone()),
            preview: PreviewCaption::new(deps.settings.clone(), deps.messenger.clone()),
            clears: ClearSettings::new(deps.settings.clone(), deps.messenger.clone()),
            lists: UpdateLists::new(deps.settings.clone(), deps.messenger.clone()),
            messenger: deps.messenger,
            gate: EventGate::new(),
        }
    }

    async fn route(&self, event: ChatEvent) -> Result<()> {
        match event {
            ChatEvent::Command {
                user,
                chat,
                name,
                args,
            } => self.on_command(user, chat, &name, &args).await,

            ChatEvent::ButtonPress {
                user,
                chat,
                message,
                callback_id,
                data,
            } => {
                // Ack first so the client stops its spinner even when
                // handling fails afterwards.
                if let Err(err) = self.messenger.ack_button(&callback_id, None).await {
                    debug!(%user, error = %err, "callback ack failed");
                }
                self.wizard.handle_callback(user, chat, message, &data).await
            }

            ChatEvent::Text { user, chat, text } => {
                if self.wizard.handle_text(user, chat, &text).await? {
                    return Ok(());
                }
                if self.thumbnails.try_save_url(user, chat, &text).await? {
                    return Ok(());
                }
                debug!(%user, "free text outside any dialog, ignoring");
                Ok(())
            }

            ChatEvent::Photo {
                user,
                chat,
                largest,
            } => {
                // A photo is not the text a modal prompt asked for; do not
                // overwrite the thumbnail by accident.
                if self.wizard.awaiting_input(user).await {
                    debug!(%user, "photo during a pending prompt, ignoring");
                    return Ok(());
                }
                self.thumbnails.save_photo(user, chat, largest).await
            }

            ChatEvent::Media { user, chat, media } => {
                self.relay.execute(user, chat, media).await
            }

            ChatEvent::ChannelForward {
                user,
                chat,
                channel,
                title,
            } => {
                if self
                    .wizard
                    .handle_channel_forward(user, chat, channel, &title)
                    .await?
                {
                    return Ok(());
                }
                debug!(%user, "channel forward outside dump capture, ignoring");
                Ok(())
            }
        }
    }

    async fn on_command(&self, user: UserId, chat: ChatId, name: &str, args: &str) -> Result<()> {
        match name {
            "start" | "help" => {
                self.reply(chat, OutgoingMessage::html(messages::START_TEXT))
                    .await
            }
            "settings" => self.wizard.open(user, chat).await,
            "cancel" => {
                if self.wizard.cancel(user, chat).await? {
                    Ok(())
                } else {
                    self.reply(chat, OutgoingMessage::plain(messages::NOTHING_TO_CANCEL))
                        .await
                }
            }
            "preview" => self.preview.execute(user, chat).await,
            "clear_prefix" => self.clears.clear_field(user, chat, ClearField::Prefix).await,
            "clear_suffix" => self.clears.clear_field(user, chat, ClearField::Suffix).await,
            "clear_link" => self.clears.clear_field(user, chat, ClearField::Link).await,
            "clear_mention" => {
                self.clears
                    .clear_field(user, chat, ClearField::Mention)
                    .await
            }
            "clear_everything" => {
                self.wizard
                    .start_flow(user, chat, WizardEvent::RequestClearAll)
                    .await
            }
            "replace_words" => self.lists.set_replacements(user, chat, args).await,
            "remove_words" => self.lists.set_removals(user, chat, args).await,
            "toggle_auto_remove" => self.lists.toggle_auto_remove(user, chat).await,
            "set_button" => {
                self.wizard
                    .start_flow(
                        user,
                        chat,
                        WizardEvent::RequestEdit {
                            field: EditField::Button,
                        },
                    )
                    .await
            }
            "set_dump" => {
                self.wizard
                    .start_flow(
                        user,
                        chat,
                        WizardEvent::RequestEdit {
                            field: EditField::DumpChannel,
                        },
                    )
                    .await
            }
            "thumb" => self.thumbnails.show(user, chat).await,
            "clear_thumb" => self.thumbnails.clear(user, chat).await,
            other => {
                debug!(%user, command = other, "unknown command");
                self.reply(chat, OutgoingMessage::plain(messages::UNKNOWN_COMMAND))
                    .await
            }
        }
    }

    async fn reply(&self, chat: ChatId, message: OutgoingMessage) -> Result<()> {
        self.messenger.send_message(chat, &message).await?;
        Ok(())
    }
}

#[async_trait]
impl ChatEventHandlerPort for EventRouter {
    /// One event per user runs to completion before the next one starts;
    /// events for different users proceed concurrently.
    async fn handle(&self, event: ChatEvent) -> Result<()> {
        let user = event.user();
        let turn = self.gate.acquire(user).await;
        let result = self.route(event).await;
        self.gate.release(user, turn).await;
        result
    }
}
