use prayer_backend::controllers::{
    catalog::CatalogController, poster::PosterController, prayer::PrayerController,
};
use prayer_backend::domain::catalog::Catalog;
use prayer_backend::domain::poster::{PosterRenderer, PosterService};
use prayer_backend::domain::prayer::PrayerService;
use prayer_backend::infrastructure::artifacts::ArtifactWriter;
use prayer_backend::infrastructure::config::{Config, LogFormat};
use prayer_backend::infrastructure::http::{build_router, start_http_server};
use prayer_backend::infrastructure::repositories::{
    GoogleTtsRepository, OpenAiGenerationRepository, S3StorageRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Prayer Backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!("Initializing AWS S3 client with region: {}", config.aws_region);

    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));

    if config.is_development() {
        tracing::debug!(
            bucket = %config.s3_bucket_name,
            staging_dir = %config.staging_dir.display(),
            assets_dir = %config.assets_dir.display(),
            "Local paths"
        );
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories and external clients
    tracing::info!("Instantiating repositories...");
    let openai_client = Arc::new(OpenAiGenerationRepository::build_client(
        &config.openai_api_key,
        config.openai_api_base.as_deref(),
    ));
    let generation_repo = Arc::new(OpenAiGenerationRepository::new(
        openai_client,
        config.openai_model.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        reqwest::Client::new(),
        config.google_tts_base_url.clone(),
        config.google_api_key.clone(),
    ));
    let storage_repo = Arc::new(S3StorageRepository::new(
        s3_client,
        config.s3_bucket_name.clone(),
        config.aws_region.clone(),
    ));
    let artifact_writer = Arc::new(ArtifactWriter::new(
        storage_repo.clone(),
        config.staging_dir.clone(),
    ));

    // 2. Services
    tracing::info!("Instantiating services...");
    let catalog = Arc::new(Catalog::new());
    let prayer_service = Arc::new(PrayerService::new(
        catalog.clone(),
        generation_repo,
        tts_repo,
        storage_repo,
        artifact_writer.clone(),
    ));
    let renderer = Arc::new(PosterRenderer::new(config.backgrounds_dir())?);
    let poster_service = Arc::new(PosterService::new(renderer, artifact_writer));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let catalog_controller = Arc::new(CatalogController::new(catalog));
    let prayer_controller = Arc::new(PrayerController::new(prayer_service));
    let poster_controller = Arc::new(PosterController::new(poster_service));

    let app = build_router(catalog_controller, prayer_controller, poster_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prayer_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
