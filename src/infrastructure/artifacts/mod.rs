use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

use crate::domain::artifact::{PrayerKeys, AUDIO_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use crate::domain::catalog::Language;
use crate::infrastructure::repositories::StorageRepository;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("staging failed: {0}")]
    Staging(String),
    #[error("upload failed: {0}")]
    Upload(String),
}

/// Public locations of an uploaded prayer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPrayer {
    pub keys: PrayerKeys,
    pub audio_url: String,
    pub text_url: String,
}

/// Stages artifacts on local disk and streams them to object storage.
///
/// Staged files are `NamedTempFile` guards: they are removed when the guard
/// drops, so nothing is left behind whether the upload succeeds or fails.
pub struct ArtifactWriter {
    storage: Arc<dyn StorageRepository>,
    staging_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(storage: Arc<dyn StorageRepository>, staging_dir: PathBuf) -> Self {
        Self {
            storage,
            staging_dir,
        }
    }

    /// Upload the audio and text of one prayer under a fresh identifier.
    ///
    /// Audio goes first. If the text upload fails the audio object stays in the
    /// bucket without its pair.
    pub async fn write_prayer(
        &self,
        text: &str,
        audio: &[u8],
        language: Language,
    ) -> Result<StoredPrayer, ArtifactError> {
        let keys = PrayerKeys::generate(language);

        let audio_file = self.stage(&keys.audio, audio).await?;
        let text_file = self.stage(&keys.text, text.as_bytes()).await?;

        self.upload(&keys.audio, audio_file.path(), AUDIO_CONTENT_TYPE).await?;
        self.upload(&keys.text, text_file.path(), TEXT_CONTENT_TYPE).await?;

        tracing::info!(
            audio_key = %keys.audio,
            text_key = %keys.text,
            audio_size_bytes = audio.len(),
            "Prayer artifacts uploaded"
        );

        Ok(StoredPrayer {
            audio_url: self.storage.public_url(&keys.audio),
            text_url: self.storage.public_url(&keys.text),
            keys,
        })
    }

    /// Upload a single artifact and return its public URL
    pub async fn stage_and_upload(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, ArtifactError> {
        let staged = self.stage(key, bytes).await?;
        self.upload(key, staged.path(), content_type).await?;

        tracing::info!(key = key, size_bytes = bytes.len(), "Artifact uploaded");

        Ok(self.storage.public_url(key))
    }

    async fn stage(&self, key: &str, bytes: &[u8]) -> Result<NamedTempFile, ArtifactError> {
        let suffix = Path::new(key)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let staged = tempfile::Builder::new()
            .prefix("staged-")
            .suffix(&suffix)
            .tempfile_in(&self.staging_dir)
            .map_err(|e| {
                ArtifactError::Staging(format!(
                    "cannot create file in {}: {}",
                    self.staging_dir.display(),
                    e
                ))
            })?;

        tokio::fs::write(staged.path(), bytes)
            .await
            .map_err(|e| ArtifactError::Staging(format!("cannot write {}: {}", key, e)))?;

        tracing::debug!(key = key, path = %staged.path().display(), "Artifact staged");

        Ok(staged)
    }

    async fn upload(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), ArtifactError> {
        self.storage
            .put_file(key, path, content_type)
            .await
            .map_err(ArtifactError::Upload)
    }
}
