pub mod error;
pub mod language;
pub mod model;
pub mod service;

pub use error::ArticleServiceError;
pub use model::ArticleContent;
pub use service::{split_paragraphs, ArticleService, ArticleServiceApi};

use serde::{Deserialize, Serialize};

/// Request for POST /api/articles
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestArticleRequest {
    pub article_key: String,
    pub text_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response for POST /api/articles
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestArticleResponse {
    pub article_key: String,
    pub language: Option<String>,
    pub paragraph_count: usize,
}
