pub mod request_id;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    catalog::CatalogController, health, poster::PosterController, prayer::PrayerController,
};
use crate::infrastructure::config::Config;

/// Assemble every route with the shared middleware stack
pub fn build_router(
    catalog_controller: Arc<CatalogController>,
    prayer_controller: Arc<PrayerController>,
    poster_controller: Arc<PosterController>,
) -> Router {
    let catalog_routes = Router::new()
        .route("/topics", get(CatalogController::topics))
        .route("/writers", get(CatalogController::writers))
        .with_state(catalog_controller);

    let prayer_routes = Router::new()
        .route("/generate-prayer", post(PrayerController::generate_prayer))
        .route("/list-prayers", get(PrayerController::list_prayers))
        .with_state(prayer_controller);

    let poster_routes = Router::new()
        .route("/generate-poster", post(PosterController::generate_poster))
        .route("/generate-gif", post(PosterController::generate_gif))
        .with_state(poster_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(catalog_routes)
        .merge(prayer_routes)
        .merge(poster_routes)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server on the configured address
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
