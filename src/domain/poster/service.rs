use super::error::PosterServiceError;
use super::render::PosterRenderer;
use super::{FileUrlResponse, GifRequest, PosterFormat, PosterRequest};
use crate::domain::artifact::{artifact_key, ArtifactKind};
use crate::infrastructure::artifacts::ArtifactWriter;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const GIF_CONTENT_TYPE: &str = "image/gif";

pub struct PosterService {
    renderer: Arc<PosterRenderer>,
    artifact_writer: Arc<ArtifactWriter>,
}

impl PosterService {
    pub fn new(renderer: Arc<PosterRenderer>, artifact_writer: Arc<ArtifactWriter>) -> Self {
        Self {
            renderer,
            artifact_writer,
        }
    }
}

#[async_trait]
pub trait PosterServiceApi: Send + Sync {
    async fn generate_poster(
        &self,
        request: PosterRequest,
    ) -> Result<FileUrlResponse, PosterServiceError>;

    async fn generate_gif(&self, request: GifRequest)
        -> Result<FileUrlResponse, PosterServiceError>;
}

#[async_trait]
impl PosterServiceApi for PosterService {
    async fn generate_poster(
        &self,
        request: PosterRequest,
    ) -> Result<FileUrlResponse, PosterServiceError> {
        validate_text(&request.text)?;
        let format: PosterFormat = request.format.parse()?;

        tracing::info!(
            format = format.extension(),
            background = %request.background,
            text_length = request.text.len(),
            "Poster generation request"
        );

        let renderer = self.renderer.clone();
        let bytes = tokio::task::spawn_blocking(move || {
            renderer.render_poster(&request.text, &request.background, format)
        })
        .await
        .map_err(anyhow::Error::from)??;

        let key = artifact_key(Uuid::new_v4(), ArtifactKind::Poster(format.extension()));
        let file_url = self
            .artifact_writer
            .stage_and_upload(&key, &bytes, format.content_type())
            .await?;

        Ok(FileUrlResponse { file_url })
    }

    async fn generate_gif(
        &self,
        request: GifRequest,
    ) -> Result<FileUrlResponse, PosterServiceError> {
        validate_text(&request.text)?;

        tracing::info!(
            background = %request.background,
            text_length = request.text.len(),
            "Animation generation request"
        );

        let renderer = self.renderer.clone();
        let bytes = tokio::task::spawn_blocking(move || {
            renderer.render_animation(&request.text, &request.background)
        })
        .await
        .map_err(anyhow::Error::from)??;

        let key = artifact_key(Uuid::new_v4(), ArtifactKind::Animation);
        let file_url = self
            .artifact_writer
            .stage_and_upload(&key, &bytes, GIF_CONTENT_TYPE)
            .await?;

        Ok(FileUrlResponse { file_url })
    }
}

fn validate_text(text: &str) -> Result<(), PosterServiceError> {
    if text.trim().is_empty() {
        return Err(PosterServiceError::Invalid(
            "Text cannot be empty".to_string(),
        ));
    }
    Ok(())
}
