use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        article::{ArticleService, ArticleServiceApi, IngestArticleRequest, IngestArticleResponse},
        narration::{ArticleAudioResponse, NarrationService, NarrationServiceApi},
    },
    error::{AppError, AppResult},
};

pub struct ArticleController {
    article_service: Arc<ArticleService>,
    narration_service: Arc<NarrationService>,
}

impl ArticleController {
    pub fn new(article_service: Arc<ArticleService>, narration_service: Arc<NarrationService>) -> Self {
        Self {
            article_service,
            narration_service,
        }
    }

    /// POST /api/articles - Store extracted article text
    pub async fn ingest(
        State(controller): State<Arc<ArticleController>>,
        Json(request): Json<IngestArticleRequest>,
    ) -> AppResult<(StatusCode, Json<IngestArticleResponse>)> {
        let response = controller
            .article_service
            .ingest(request)
            .await
            .map_err(AppError::from)?;

        Ok((StatusCode::CREATED, Json(response)))
    }

    /// POST /api/articles/:articleKey/audio - Generate and store the article's audio
    pub async fn generate_audio(
        State(controller): State<Arc<ArticleController>>,
        Path(article_key): Path<String>,
    ) -> AppResult<Json<ArticleAudioResponse>> {
        let audio = controller
            .narration_service
            .generate_article_audio(&article_key)
            .await
            .map_err(AppError::from)?;

        Ok(Json(ArticleAudioResponse::from(audio)))
    }
}
