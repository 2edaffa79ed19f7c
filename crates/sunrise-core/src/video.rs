//! Video Reference Extractor: pulls a YouTube id out of generated text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Unanchored: an id-like run longer than 11 characters yields its first 11.
static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?youtu(?:be\.com/watch\?v=|\.be/)([A-Za-z0-9_\-]{11})")
        .expect("youtube pattern is valid")
});

/// First YouTube video id in `text`, if any.
pub fn extract_video_id(text: &str) -> Option<&str> {
    YOUTUBE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Player URL for an extracted id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
