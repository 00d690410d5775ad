use serde::{Deserialize, Serialize};

use crate::ids::ChatId;

/// Current settings schema version. Bump together with a registered
/// migration whenever the persisted shape changes.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// Per-user caption settings record.
/// 每个用户独立的 caption 配置记录。
///
/// Every field participates in the composition pipeline; empty or unset
/// fields make their stage a no-op. Unknown fields in persisted records are
/// ignored so older binaries can read newer files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the persisted record.
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    /// Text placed before the caption, separated by one space.
    #[serde(default)]
    pub prefix: String,

    /// Text appended after the caption. When the caption ends in a known
    /// video container extension the suffix moves in front of it.
    #[serde(default)]
    pub suffix: String,

    /// Promotional line appended after a blank line.
    #[serde(default)]
    pub mention_text: String,

    /// When set, the fully styled caption becomes the label of one link.
    #[serde(default)]
    pub link_wrap_url: Option<String>,

    /// Active caption styles. Nesting order is canonical, not insertion order.
    #[serde(default)]
    pub styles: StyleSet,

    /// Ordered literal replacement pairs, applied case-insensitively.
    #[serde(default)]
    pub replacements: Vec<ReplacePair>,

    /// Literal removal tokens, applied case-insensitively.
    #[serde(default)]
    pub removals: Vec<String>,

    /// How removal tokens match the caption text.
    #[serde(default)]
    pub removal_match: RemovalMatch,

    /// Strip `http(s)://` URLs from incoming captions.
    #[serde(default)]
    pub auto_remove_links: bool,

    /// Strip `@username` tokens from incoming captions.
    #[serde(default)]
    pub auto_remove_usernames: bool,

    /// Strip everything from the first video container extension tail
    /// to the end of the line.
    #[serde(default)]
    pub auto_remove_extension_tail: bool,

    /// Inline URL button attached under relayed media.
    #[serde(default)]
    pub button: Option<LinkButton>,

    /// Channel that receives a copy of every relayed file.
    #[serde(default)]
    pub dump_channel_id: Option<ChatId>,
}

impl Settings {
    /// True when any of the automatic cleanup switches is on.
    pub fn auto_clean_enabled(&self) -> bool {
        self.auto_remove_links || self.auto_remove_usernames || self.auto_remove_extension_tail
    }
}

/// One literal replacement entry. Pairs with an empty `old` never enter the
/// record; the composer skips them anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacePair {
    pub old: String,
    pub new: String,
}

/// Matching mode for the removal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalMatch {
    /// Remove every occurrence of the token.
    Substring,
    /// Remove the token only when both neighbours are non-alphanumeric.
    WholeWord,
}

/// Inline URL button shown under relayed media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
}

/// Caption style. Inline styles nest in a fixed canonical order; the two
/// block styles are mutually exclusive in the final markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptionStyle {
    Bold,
    Italic,
    Monospace,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    Pre,
}

impl CaptionStyle {
    pub fn is_block(self) -> bool {
        matches!(self, CaptionStyle::Blockquote | CaptionStyle::Pre)
    }

    /// Stable lowercase name, also used in menu headers and notices.
    pub fn label(self) -> &'static str {
        match self {
            CaptionStyle::Bold => "bold",
            CaptionStyle::Italic => "italic",
            CaptionStyle::Monospace => "monospace",
            CaptionStyle::Underline => "underline",
            CaptionStyle::Strikethrough => "strikethrough",
            CaptionStyle::Spoiler => "spoiler",
            CaptionStyle::Blockquote => "blockquote",
            CaptionStyle::Pre => "pre",
        }
    }
}

/// Unordered set of active styles.
/// 当前启用的样式集合。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSet(Vec<CaptionStyle>);

impl StyleSet {
    pub fn contains(&self, style: CaptionStyle) -> bool {
        self.0.contains(&style)
    }

    /// XOR-mutates one style and reports whether it is now active.
    /// Turning a block style on drops the other block style.
    pub fn toggle(&mut self, style: CaptionStyle) -> bool {
        if let Some(pos) = self.0.iter().position(|s| *s == style) {
            self.0.remove(pos);
            return false;
        }
        if style.is_block() {
            self.0.retain(|s| !s.is_block());
        }
        self.0.push(style);
        true
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CaptionStyle> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // A record written before new fields existed still loads.
        let json = r#"{"schema_version":1,"prefix":"[HD]"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.prefix, "[HD]");
        assert_eq!(settings.suffix, "");
        assert!(settings.styles.is_empty());
        assert_eq!(settings.removal_match, RemovalMatch::Substring);
        assert!(!settings.auto_clean_enabled());
        assert!(settings.button.is_none());
    }

    #[test]
    fn test_schema_version_defaults_when_absent() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_roundtrip_preserves_record() {
        let mut settings = Settings::default();
        settings.prefix = "[Grab]".to_string();
        settings.styles.toggle(CaptionStyle::Bold);
        settings.styles.toggle(CaptionStyle::Blockquote);
        settings.replacements.push(ReplacePair {
            old: "old".to_string(),
            new: "new".to_string(),
        });
        settings.dump_channel_id = Some(ChatId::new(-1001234567890));

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_style_names_serialize_snake_case() {
        let json = serde_json::to_string(&CaptionStyle::Strikethrough).unwrap();
        assert_eq!(json, r#""strikethrough""#);
        let json = serde_json::to_string(&RemovalMatch::WholeWord).unwrap();
        assert_eq!(json, r#""whole_word""#);
    }

    #[test]
    fn toggle_twice_restores_the_set() {
        let mut styles = StyleSet::default();
        styles.toggle(CaptionStyle::Bold);
        let before = styles.clone();

        styles.toggle(CaptionStyle::Spoiler);
        styles.toggle(CaptionStyle::Spoiler);
        assert_eq!(styles, before);
    }

    #[test]
    fn block_styles_exclude_each_other() {
        let mut styles = StyleSet::default();
        styles.toggle(CaptionStyle::Pre);
        styles.toggle(CaptionStyle::Blockquote);

        assert!(styles.contains(CaptionStyle::Blockquote));
        assert!(!styles.contains(CaptionStyle::Pre));
    }
}
