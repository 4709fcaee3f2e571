use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::prayer::{
        GeneratePrayerRequest, ListPrayersResponse, PrayerResponse, PrayerService,
        PrayerServiceApi,
    },
    error::AppResult,
};

pub struct PrayerController {
    prayer_service: Arc<PrayerService>,
}

impl PrayerController {
    pub fn new(prayer_service: Arc<PrayerService>) -> Self {
        Self { prayer_service }
    }

    /// POST /generate-prayer - Generate, narrate and store a prayer
    pub async fn generate_prayer(
        State(controller): State<Arc<PrayerController>>,
        payload: Result<Json<GeneratePrayerRequest>, JsonRejection>,
    ) -> AppResult<Json<PrayerResponse>> {
        let Json(request) = payload?;
        let response = controller.prayer_service.generate_prayer(request).await?;
        Ok(Json(response))
    }

    /// GET /list-prayers - Stored prayers with their text
    pub async fn list_prayers(
        State(controller): State<Arc<PrayerController>>,
    ) -> AppResult<Json<ListPrayersResponse>> {
        let response = controller.prayer_service.list_prayers().await?;
        Ok(Json(response))
    }
}
