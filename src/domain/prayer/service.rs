use super::error::PrayerServiceError;
use super::{GeneratePrayerRequest, ListPrayersResponse, PrayerListItem, PrayerResponse};
use crate::domain::artifact::{is_audio_key, text_key_for_audio};
use crate::domain::catalog::Catalog;
use crate::infrastructure::artifacts::ArtifactWriter;
use crate::infrastructure::repositories::{GenerationRepository, StorageRepository, TtsRepository};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

pub struct PrayerService {
    catalog: Arc<Catalog>,
    generation_repo: Arc<dyn GenerationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    storage_repo: Arc<dyn StorageRepository>,
    artifact_writer: Arc<ArtifactWriter>,
}

impl PrayerService {
    pub fn new(
        catalog: Arc<Catalog>,
        generation_repo: Arc<dyn GenerationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        storage_repo: Arc<dyn StorageRepository>,
        artifact_writer: Arc<ArtifactWriter>,
    ) -> Self {
        Self {
            catalog,
            generation_repo,
            tts_repo,
            storage_repo,
            artifact_writer,
        }
    }
}

#[async_trait]
pub trait PrayerServiceApi: Send + Sync {
    /// Generate a prayer and store it with its narration
    ///
    /// This operation:
    /// - Validates the request against the catalog (no external call on failure)
    /// - Generates the text from the language prompt and the topic
    /// - Synthesizes the text with the language voice
    /// - Uploads audio then text under one fresh identifier
    async fn generate_prayer(
        &self,
        request: GeneratePrayerRequest,
    ) -> Result<PrayerResponse, PrayerServiceError>;

    /// List stored prayers, pairing each audio object with its text
    async fn list_prayers(&self) -> Result<ListPrayersResponse, PrayerServiceError>;
}

#[async_trait]
impl PrayerServiceApi for PrayerService {
    async fn generate_prayer(
        &self,
        request: GeneratePrayerRequest,
    ) -> Result<PrayerResponse, PrayerServiceError> {
        let validated = self
            .catalog
            .validate(&request.topic, &request.writer, &request.language)?;

        tracing::info!(
            topic = %validated.topic,
            writer = %validated.writer,
            language = %validated.language,
            "Prayer generation request"
        );

        let prompt = self.catalog.prompt_for(validated.language, &validated.topic);
        let prayer = self
            .generation_repo
            .generate(&prompt)
            .await
            .map_err(PrayerServiceError::Generation)?;

        let audio = self
            .tts_repo
            .synthesize(&prayer, self.catalog.voice(validated.language))
            .await
            .map_err(PrayerServiceError::Synthesis)?;

        let stored = self
            .artifact_writer
            .write_prayer(&prayer, &audio, validated.language)
            .await?;

        Ok(PrayerResponse {
            prayer,
            audio_url: stored.audio_url,
            text_url: stored.text_url,
            language: validated.language,
        })
    }

    async fn list_prayers(&self) -> Result<ListPrayersResponse, PrayerServiceError> {
        let keys = self
            .storage_repo
            .list_keys()
            .await
            .map_err(PrayerServiceError::Storage)?;

        let entries = keys
            .iter()
            .filter(|key| is_audio_key(key))
            .filter_map(|audio_key| {
                text_key_for_audio(audio_key).map(|text_key| (audio_key.as_str(), text_key))
            })
            .map(|(audio_key, text_key)| self.fetch_entry(audio_key, text_key));

        let prayers = join_all(entries).await;

        tracing::info!(prayer_count = prayers.len(), "Prayers listed");

        Ok(ListPrayersResponse { prayers })
    }
}

impl PrayerService {
    /// A failed text fetch never fails the listing; the entry comes back without text
    async fn fetch_entry(&self, audio_key: &str, text_key: String) -> PrayerListItem {
        let text = match self.storage_repo.get_text(&text_key).await {
            Ok(Some(text)) => Some(text),
            Ok(None) => {
                tracing::warn!(
                    audio_key = audio_key,
                    text_key = %text_key,
                    "Prayer text not found"
                );
                None
            }
            Err(e) => {
                tracing::error!(error = %e, text_key = %text_key, "Failed to fetch prayer text");
                None
            }
        };

        PrayerListItem {
            audio_url: self.storage_repo.public_url(audio_key),
            text_url: self.storage_repo.public_url(&text_key),
            text,
        }
    }
}
