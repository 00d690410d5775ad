//! Strongly typed identifiers shared across the workspace.

mod chat_id;
mod id_macro;
mod media_ref;
mod message_id;
mod user_id;

pub use chat_id::ChatId;
pub use media_ref::MediaRef;
pub use message_id::MessageId;
pub use user_id::UserId;
