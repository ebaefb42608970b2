use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::domain::narration::voice::supported_languages;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness plus the languages that get a dedicated voice
pub async fn health_ready() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": "polly",
            "voices": supported_languages(),
        })),
    )
}
