use crate::domain::catalog::CatalogError;
use crate::error::AppError;
use crate::infrastructure::artifacts::ArtifactError;

const GENERATE_FAILED: &str = "Error generating prayer and audio";
const LIST_FAILED: &str = "Error listing prayers";

#[derive(Debug, thiserror::Error)]
pub enum PrayerServiceError {
    #[error(transparent)]
    Invalid(#[from] CatalogError),
    #[error("generation failed: {0}")]
    Generation(String),
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error(transparent)]
    Upload(#[from] ArtifactError),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<PrayerServiceError> for AppError {
    fn from(err: PrayerServiceError) -> Self {
        match err {
            PrayerServiceError::Invalid(e) => e.into(),
            PrayerServiceError::Generation(_)
            | PrayerServiceError::Synthesis(_)
            | PrayerServiceError::Upload(_) => AppError::external(GENERATE_FAILED, err.to_string()),
            PrayerServiceError::Storage(_) => AppError::external(LIST_FAILED, err.to_string()),
        }
    }
}
