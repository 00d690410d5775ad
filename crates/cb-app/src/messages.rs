//! User-facing replies owned by the router and command handlers.
//!
//! Everything the bot says outside the wizard renderer lives here, so the
//! wording stays in one place.

/// `/start` help text, HTML.
pub const START_TEXT: &str = "\
👋 Hi! Send me a <b>video</b> or a video <b>file</b> and I will send it back \
with your caption applied.

<b>Caption settings</b>
/settings – open the settings menu
/preview – see a sample caption with your settings
/replace_words – set replace pairs: <code>old - new, old - new</code>
/remove_words – set words to remove: <code>hd, 2025, Hindi</code>
/toggle_auto_remove – auto cleanup of links, usernames and file extensions
/set_button – attach a URL button to your files
/set_dump – auto-copy your files to a channel

<b>Thumbnail</b>
Send a photo (or a direct image URL) to save it as your video thumbnail.
/thumb – show your saved thumbnail
/clear_thumb – delete it

<b>Quick clears</b>
/clear_prefix /clear_suffix /clear_link /clear_mention
/clear_everything – reset all settings

/cancel – abort the current prompt";

pub const UNKNOWN_COMMAND: &str = "🤔 Unknown command. Send /start to see what I can do.";
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";

pub const THUMB_NONE: &str = "📷 No thumbnail saved. Send a photo to set one.";
pub const THUMB_SAVED: &str = "✅ Thumbnail saved!";
pub const THUMB_SAVED_URL: &str = "✅ Thumbnail saved from URL!";
pub const THUMB_CLEARED: &str = "🗑 Thumbnail cleared.";

pub const NOT_A_VIDEO_HINT: &str =
    "⚠️ That file does not look like a video, so I left it alone.";
pub const RELAY_FAILED: &str = "⚠️ Could not process that file. Please try again.";
pub const DUMP_COPY_FAILED: &str =
    "⚠️ Sent, but copying to your dump channel failed. Check that I am still an admin there.";

pub const REPLACE_USAGE: &str =
    "Usage: /replace_words old - new, old - new\nExample: /replace_words hdrip - WebRip, x265 - HEVC";
pub const REMOVE_USAGE: &str =
    "Usage: /remove_words word, word\nExample: /remove_words hd, 2025, Hindi";

pub fn auto_clean_switched(enabled: bool) -> String {
    if enabled {
        "🧼 Auto cleanup ON: links, usernames and extension tails will be removed.".to_string()
    } else {
        "🧼 Auto cleanup OFF.".to_string()
    }
}
