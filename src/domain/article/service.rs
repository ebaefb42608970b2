use super::error::ArticleServiceError;
use super::language::{build_detector, detect_language};
use super::model::ArticleContent;
use super::{IngestArticleRequest, IngestArticleResponse};
use crate::infrastructure::repositories::{ArticleRepository, StorageError};
use async_trait::async_trait;
use lingua::LanguageDetector;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

pub struct ArticleService {
    article_repo: Arc<dyn ArticleRepository>,
    language_detector: LanguageDetector,
}

impl ArticleService {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self {
            article_repo,
            language_detector: build_detector(),
        }
    }
}

#[async_trait]
pub trait ArticleServiceApi: Send + Sync {
    /// Store extracted article text so it can be narrated later
    ///
    /// This operation:
    /// - Splits the text content into paragraphs (one per non-blank line)
    /// - Detects the language when the caller did not provide one
    /// - Stores the record under the article key
    async fn ingest(
        &self,
        request: IngestArticleRequest,
    ) -> Result<IngestArticleResponse, ArticleServiceError>;
}

#[async_trait]
impl ArticleServiceApi for ArticleService {
    async fn ingest(
        &self,
        request: IngestArticleRequest,
    ) -> Result<IngestArticleResponse, ArticleServiceError> {
        let paragraphs = split_paragraphs(&request.text_content);
        if paragraphs.is_empty() {
            return Err(ArticleServiceError::Invalid(
                "text content has no paragraphs".to_string(),
            ));
        }

        let language = match request.language.filter(|l| !l.trim().is_empty()) {
            Some(language) => Some(language),
            None => self.detect_language(&paragraphs),
        };

        let content = ArticleContent {
            paragraphs,
            language,
        };

        self.article_repo
            .save_content(&request.article_key, &content)
            .await
            .map_err(|e| match e {
                StorageError::InvalidKey(msg) => ArticleServiceError::Invalid(msg),
                other => ArticleServiceError::Dependency(other.to_string()),
            })?;

        tracing::info!(
            article_key = %request.article_key,
            paragraph_count = content.paragraphs.len(),
            language = content.language.as_deref().unwrap_or("none"),
            "Article content stored"
        );

        Ok(IngestArticleResponse {
            article_key: request.article_key,
            language: content.language,
            paragraph_count: content.paragraphs.len(),
        })
    }
}

impl ArticleService {
    fn detect_language(&self, paragraphs: &[String]) -> Option<String> {
        let text = paragraphs.join("\n");
        match detect_language(&self.language_detector, &text) {
            Some(code) => Some(code.to_string()),
            None => {
                tracing::warn!("Could not detect article language, narration will use the fallback voice");
                None
            }
        }
    }
}

/// Split extracted text content into narration paragraphs: one per line,
/// whitespace collapsed, blank lines dropped
pub fn split_paragraphs(text_content: &str) -> Vec<String> {
    text_content
        .lines()
        .map(|line| WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect()
}
