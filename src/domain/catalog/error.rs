use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),
    #[error("Invalid topic: {0}")]
    InvalidTopic(String),
    #[error("Invalid writer: {0}")]
    InvalidWriter(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
