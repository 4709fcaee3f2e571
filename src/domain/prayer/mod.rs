pub mod error;
pub mod service;

pub use error::PrayerServiceError;
pub use service::{PrayerService, PrayerServiceApi};

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Language;

/// Request for POST /generate-prayer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePrayerRequest {
    pub topic: String,
    pub writer: String,
    pub language: String,
}

/// Response for POST /generate-prayer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerResponse {
    pub prayer: String,
    pub audio_url: String,
    pub text_url: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerListItem {
    pub audio_url: String,
    pub text_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response for GET /list-prayers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPrayersResponse {
    pub prayers: Vec<PrayerListItem>,
}
