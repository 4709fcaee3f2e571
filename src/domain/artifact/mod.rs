//! Bucket key naming for every artifact the service stores.
//!
//! Keys are derived from a random identifier so concurrent requests never
//! collide. Audio and text keys of one prayer share identifier and language,
//! and the text key can be recomputed from the audio key alone.

use uuid::Uuid;

use crate::domain::catalog::Language;

pub const AUDIO_PREFIX: &str = "output-";
pub const AUDIO_EXTENSION: &str = ".mp3";
pub const TEXT_PREFIX: &str = "prayer-";
pub const TEXT_EXTENSION: &str = ".txt";

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Audio(Language),
    Text(Language),
    /// Poster with its file extension (without the dot)
    Poster(&'static str),
    Animation,
}

/// Build the bucket key for an artifact
pub fn artifact_key(id: Uuid, kind: ArtifactKind) -> String {
    match kind {
        ArtifactKind::Audio(language) => {
            format!("{AUDIO_PREFIX}{id}-{language}{AUDIO_EXTENSION}")
        }
        ArtifactKind::Text(language) => {
            format!("{TEXT_PREFIX}{id}-{language}{TEXT_EXTENSION}")
        }
        ArtifactKind::Poster(extension) => format!("poster-{id}.{extension}"),
        ArtifactKind::Animation => format!("animation-{id}.gif"),
    }
}

/// Audio and text keys for one prayer, sharing the same identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerKeys {
    pub audio: String,
    pub text: String,
}

impl PrayerKeys {
    pub fn new(id: Uuid, language: Language) -> Self {
        Self {
            audio: artifact_key(id, ArtifactKind::Audio(language)),
            text: artifact_key(id, ArtifactKind::Text(language)),
        }
    }

    pub fn generate(language: Language) -> Self {
        Self::new(Uuid::new_v4(), language)
    }
}

pub fn is_audio_key(key: &str) -> bool {
    key.ends_with(AUDIO_EXTENSION)
}

/// Derive the paired text key of an audio key.
///
/// Swaps the `output-` prefix for `prayer-` and `.mp3` for `.txt`. Keys that do
/// not carry the audio prefix only get their extension swapped.
pub fn text_key_for_audio(audio_key: &str) -> Option<String> {
    let stem = audio_key.strip_suffix(AUDIO_EXTENSION)?;
    let text_stem = match stem.strip_prefix(AUDIO_PREFIX) {
        Some(rest) => format!("{TEXT_PREFIX}{rest}"),
        None => stem.to_string(),
    };
    Some(format!("{text_stem}{TEXT_EXTENSION}"))
}
