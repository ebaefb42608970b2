use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::narration::{NarrateRequest, NarrationService, NarrationServiceApi},
    error::{AppError, AppResult},
};

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

pub struct NarrationController {
    narration_service: Arc<NarrationService>,
}

impl NarrationController {
    pub fn new(narration_service: Arc<NarrationService>) -> Self {
        Self { narration_service }
    }

    /// POST /api/narrate - Convert paragraphs straight to MP3
    pub async fn narrate(
        State(controller): State<Arc<NarrationController>>,
        Json(request): Json<NarrateRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller
            .narration_service
            .narrate(request.paragraphs, request.language)
            .await
            .map_err(AppError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_CONTENT_TYPE));
        headers.insert("X-Voice-Id", HeaderValue::from_static(result.voice.voice_id));
        headers.insert("X-Fragment-Count", HeaderValue::from(result.fragment_count));

        Ok((StatusCode::OK, headers, Body::from(result.audio.into_bytes())))
    }
}
