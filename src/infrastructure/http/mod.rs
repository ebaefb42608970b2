pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{article::ArticleController, health, narration::NarrationController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with every route and layer
pub fn build_router(
    article_controller: Arc<ArticleController>,
    narration_controller: Arc<NarrationController>,
) -> Router {
    // Article ingestion and audio generation
    let article_routes = Router::new()
        .route("/api/articles", post(ArticleController::ingest))
        .route(
            "/api/articles/:articleKey/audio",
            post(ArticleController::generate_audio),
        )
        .with_state(article_controller);

    // Direct narration, nothing stored
    let narration_routes = Router::new()
        .route("/api/narrate", post(NarrationController::narrate))
        .with_state(narration_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(article_routes)
        .merge(narration_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(config: Arc<Config>, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
