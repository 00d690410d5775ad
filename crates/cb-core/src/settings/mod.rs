//! Per-user settings: record shape, defaults and free-text parsers.

pub mod defaults;
pub mod input;
pub mod model;

pub use model::{
    CaptionStyle, LinkButton, RemovalMatch, ReplacePair, Settings, StyleSet,
    CURRENT_SCHEMA_VERSION,
};
