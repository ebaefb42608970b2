use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use narrator_backend::controllers::{article::ArticleController, narration::NarrationController};
use narrator_backend::domain::article::ArticleService;
use narrator_backend::domain::narration::{
    NarrationService, SynthesisOrchestrator, TextChunker, VoiceConfigResolver,
};
use narrator_backend::infrastructure::config::{Config, LogFormat};
use narrator_backend::infrastructure::http::{build_router, start_http_server};
use narrator_backend::infrastructure::repositories::{
    ObjectStoreArticleRepository, PollySynthesisClient,
};
use narrator_backend::infrastructure::storage::create_object_store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting Narrator Backend on {}:{}",
        config.host,
        config.port
    );

    // Fail at startup on a bad pipeline configuration, not on the first article
    let voice_resolver = VoiceConfigResolver::with_fallback(&config.fallback_language)?;
    let chunker = TextChunker::new(config.max_chunk_size, config.chunk_strategy)?;
    tracing::info!(
        fallback_language = voice_resolver.fallback_language(),
        max_chunk_size = chunker.max_chunk_size(),
        chunk_strategy = ?chunker.strategy(),
        "Narration pipeline configured"
    );

    tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;
    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    tracing::info!("AWS Polly client initialized successfully");

    let object_store = create_object_store(&config)?;
    let config = Arc::new(config);

    // 1. Repositories and provider clients
    let article_repo = Arc::new(ObjectStoreArticleRepository::new(object_store));
    let synthesis_client = Arc::new(PollySynthesisClient::new(polly_client));

    // 2. Services
    let orchestrator = SynthesisOrchestrator::new(synthesis_client, voice_resolver, chunker);
    let narration_service = Arc::new(NarrationService::new(orchestrator, article_repo.clone()));
    let article_service = Arc::new(ArticleService::new(article_repo));

    // 3. Controllers
    let article_controller = Arc::new(ArticleController::new(
        article_service,
        narration_service.clone(),
    ));
    let narration_controller = Arc::new(NarrationController::new(narration_service));

    let app = build_router(article_controller, narration_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "narrator_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
