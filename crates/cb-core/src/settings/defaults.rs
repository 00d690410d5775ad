//! Default values for settings records.
//!
//! A default record leaves every pipeline stage inert, so composing with it
//! returns the escaped input unchanged.

use super::model::{RemovalMatch, Settings, CURRENT_SCHEMA_VERSION};

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            prefix: String::new(),
            suffix: String::new(),
            mention_text: String::new(),
            link_wrap_url: None,
            styles: Default::default(),
            replacements: Vec::new(),
            removals: Vec::new(),
            removal_match: RemovalMatch::default(),
            auto_remove_links: false,
            auto_remove_usernames: false,
            auto_remove_extension_tail: false,
            button: None,
            dump_channel_id: None,
        }
    }
}

impl Default for RemovalMatch {
    fn default() -> Self {
        RemovalMatch::Substring
    }
}
