//! File extension handling for suffix placement and tail cleanup.

/// Video container extensions the pipeline treats specially.
pub const VIDEO_EXTENSIONS: [&str; 7] = ["mkv", "mp4", "avi", "mov", "webm", "m4v", "flv"];

/// Splits a trailing `.ext` token off `text`.
///
/// The extension must be 1 to 5 ASCII alphanumerics after the final dot.
/// Returns the base (without the dot) and the extension.
pub fn split_trailing_extension(text: &str) -> Option<(&str, &str)> {
    let dot = text.rfind('.')?;
    let ext = &text[dot + 1..];
    if ext.is_empty() || ext.len() > 5 {
        return None;
    }
    if !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some((&text[..dot], ext))
}

/// True for a known video container extension, ignoring case.
pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// True when `file_name` ends in a known video container extension.
pub fn has_video_extension(file_name: &str) -> bool {
    split_trailing_extension(file_name).is_some_and(|(_, ext)| is_video_extension(ext))
}
