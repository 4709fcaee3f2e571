use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::catalog::{Catalog, Language},
    error::{AppError, AppResult},
};

/// Query string for GET /topics and GET /writers
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

pub struct CatalogController {
    catalog: Arc<Catalog>,
}

impl CatalogController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// GET /topics?language= - Topics offered for a language
    pub async fn topics(
        State(controller): State<Arc<CatalogController>>,
        Query(query): Query<LanguageQuery>,
    ) -> AppResult<Json<&'static [&'static str]>> {
        let language = controller.language(query)?;
        Ok(Json(controller.catalog.topics(language)))
    }

    /// GET /writers?language= - Writers offered for a language
    pub async fn writers(
        State(controller): State<Arc<CatalogController>>,
        Query(query): Query<LanguageQuery>,
    ) -> AppResult<Json<&'static [&'static str]>> {
        let language = controller.language(query)?;
        Ok(Json(controller.catalog.writers(language)))
    }

    fn language(&self, query: LanguageQuery) -> AppResult<Language> {
        let language = query
            .language
            .ok_or_else(|| AppError::BadRequest("Language is required".to_string()))?;
        Ok(self.catalog.parse_language(&language)?)
    }
}
