use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::poster::{FileUrlResponse, GifRequest, PosterRequest, PosterService, PosterServiceApi},
    error::AppResult,
};

pub struct PosterController {
    poster_service: Arc<PosterService>,
}

impl PosterController {
    pub fn new(poster_service: Arc<PosterService>) -> Self {
        Self { poster_service }
    }

    /// POST /generate-poster
    pub async fn generate_poster(
        State(controller): State<Arc<PosterController>>,
        payload: Result<Json<PosterRequest>, JsonRejection>,
    ) -> AppResult<Json<FileUrlResponse>> {
        let Json(request) = payload?;
        let response = controller.poster_service.generate_poster(request).await?;
        Ok(Json(response))
    }

    /// POST /generate-gif
    pub async fn generate_gif(
        State(controller): State<Arc<PosterController>>,
        payload: Result<Json<GifRequest>, JsonRejection>,
    ) -> AppResult<Json<FileUrlResponse>> {
        let Json(request) = payload?;
        let response = controller.poster_service.generate_gif(request).await?;
        Ok(Json(response))
    }
}
