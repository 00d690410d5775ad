//! # cb-telegram
//!
//! Telegram Bot API transport for CaptionBot: wire models, the HTTP
//! client, update-to-event conversion and the long-poll loop. Everything
//! behind this crate speaks the transport-neutral types of `cb-core`;
//! no other crate in the workspace sees a wire struct.

pub mod api;
pub mod convert;
pub mod gateway;
pub mod longpoll;

pub use api::client::BotApiClient;
pub use gateway::TelegramGateway;
pub use longpoll::UpdatePoller;
