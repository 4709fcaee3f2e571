use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// A downstream dependency (generation, synthesis, storage, rendering) failed.
    /// `message` is what the caller sees, `detail` only reaches the logs.
    #[error("External service error: {message}: {detail}")]
    ExternalService { message: &'static str, detail: String },
}

impl AppError {
    pub fn external(message: &'static str, detail: impl Into<String>) -> Self {
        Self::ExternalService {
            message,
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ExternalService { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body returned to the caller. Server errors never leak their detail.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(reason) => reason.clone(),
            Self::ExternalService { message, .. } => message.to_string(),
        }
    }
}

/// Malformed or incomplete JSON bodies are reported as 400 with the parser's reason
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                error = %self,
                status = %status.as_u16(),
                "Request rejected"
            );
        }

        (status, self.public_message()).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
