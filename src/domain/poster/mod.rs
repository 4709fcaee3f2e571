pub mod error;
pub mod render;
pub mod service;

pub use error::{PosterServiceError, RenderError};
pub use render::PosterRenderer;
pub use service::{PosterService, PosterServiceApi};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Request for POST /generate-poster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterRequest {
    pub text: String,
    pub format: String,
    pub background: String,
}

/// Request for POST /generate-gif
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifRequest {
    pub text: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUrlResponse {
    pub file_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterFormat {
    Png,
    Jpeg,
}

impl PosterFormat {
    /// File extension used in the bucket key
    pub fn extension(&self) -> &'static str {
        match self {
            PosterFormat::Png => "png",
            PosterFormat::Jpeg => "jpg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            PosterFormat::Png => "image/png",
            PosterFormat::Jpeg => "image/jpeg",
        }
    }
}

impl FromStr for PosterFormat {
    type Err = PosterServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(PosterFormat::Png),
            "jpeg" | "jpg" => Ok(PosterFormat::Jpeg),
            _ => Err(PosterServiceError::Invalid(format!(
                "Unsupported format: {}",
                s
            ))),
        }
    }
}
