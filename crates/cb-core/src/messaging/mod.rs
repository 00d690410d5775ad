//! Transport-neutral message models, inbound and outbound.

pub mod event;
pub mod outgoing;

pub use event::{ChatEvent, IncomingMedia, MediaKind};
pub use outgoing::{InlineButton, InlineKeyboard, OutgoingMessage, TextMarkup};
