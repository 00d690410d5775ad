//! # cb-core
//!
//! Core domain of CaptionBot: settings records, the caption composition
//! pipeline, the settings wizard state machine and the ports the outer
//! layers implement. This crate holds no infrastructure dependencies; it
//! never performs IO.

pub mod caption;
pub mod ids;
pub mod messaging;
pub mod ports;
pub mod settings;
pub mod wizard;

pub use ids::{ChatId, MediaRef, MessageId, UserId};
pub use settings::model::Settings;
