use crate::error::AppError;
use crate::infrastructure::artifacts::ArtifactError;

const RENDER_FAILED: &str = "Error generating image";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid background name: {0:?}")]
    InvalidBackground(String),
    #[error("cannot load background {name}: {source}")]
    Background {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("font error: {0}")]
    Font(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PosterServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Upload(#[from] ArtifactError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<PosterServiceError> for AppError {
    fn from(err: PosterServiceError) -> Self {
        match err {
            PosterServiceError::Invalid(msg) => AppError::BadRequest(msg),
            _ => AppError::external(RENDER_FAILED, err.to_string()),
        }
    }
}
