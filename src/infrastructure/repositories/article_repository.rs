use crate::domain::article::ArticleContent;
use async_trait::async_trait;
use object_store::{
    path::Path as ObjectPath, Attribute, Attributes, ObjectStore, PutOptions, PutPayload,
};
use std::sync::Arc;

const CONTENT_OBJECT: &str = "content.json";
const AUDIO_OBJECT: &str = "audio.mp3";
const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid article key: {0}")]
    InvalidKey(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("malformed article record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("object store error: {0}")]
    Backend(object_store::Error),
}

impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => StorageError::NotFound(path),
            other => StorageError::Backend(other),
        }
    }
}

/// Storage for article records and their generated audio, addressed by an
/// opaque article key
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn load_content(&self, article_key: &str) -> Result<ArticleContent, StorageError>;

    /// Returns the object key the record was written to
    async fn save_content(
        &self,
        article_key: &str,
        content: &ArticleContent,
    ) -> Result<String, StorageError>;

    /// Returns the object key the audio was written to
    async fn save_audio(&self, article_key: &str, audio: Vec<u8>) -> Result<String, StorageError>;
}

/// Article repository over any `object_store` backend (S3 in production,
/// in-memory for development and tests)
pub struct ObjectStoreArticleRepository {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreArticleRepository {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    fn object_key(article_key: &str, object: &str) -> Result<String, StorageError> {
        validate_article_key(article_key)?;
        Ok(format!("{}/{}", article_key, object))
    }
}

#[async_trait]
impl ArticleRepository for ObjectStoreArticleRepository {
    async fn load_content(&self, article_key: &str) -> Result<ArticleContent, StorageError> {
        let key = Self::object_key(article_key, CONTENT_OBJECT)?;

        let bytes = self
            .store
            .get(&ObjectPath::from(key.as_str()))
            .await?
            .bytes()
            .await?;

        tracing::debug!(object_key = %key, size = bytes.len(), "Article content loaded");

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save_content(
        &self,
        article_key: &str,
        content: &ArticleContent,
    ) -> Result<String, StorageError> {
        let key = Self::object_key(article_key, CONTENT_OBJECT)?;
        let body = serde_json::to_vec(content)?;

        self.store
            .put(&ObjectPath::from(key.as_str()), PutPayload::from(body))
            .await?;

        tracing::debug!(object_key = %key, "Article content stored");
        Ok(key)
    }

    async fn save_audio(&self, article_key: &str, audio: Vec<u8>) -> Result<String, StorageError> {
        let key = Self::object_key(article_key, AUDIO_OBJECT)?;
        let size = audio.len();

        let options = PutOptions {
            attributes: Attributes::from_iter([(Attribute::ContentType, AUDIO_CONTENT_TYPE)]),
            ..Default::default()
        };

        self.store
            .put_opts(&ObjectPath::from(key.as_str()), PutPayload::from(audio), options)
            .await?;

        tracing::debug!(object_key = %key, size, "Article audio stored");
        Ok(key)
    }
}

/// Keys are opaque, but must stay inside their own prefix
pub fn validate_article_key(article_key: &str) -> Result<(), StorageError> {
    let invalid = |reason: &str| Err(StorageError::InvalidKey(format!("'{}' {}", article_key, reason)));

    if article_key.trim().is_empty() {
        return invalid("is empty");
    }
    if article_key.starts_with('/') || article_key.ends_with('/') {
        return invalid("must not start or end with '/'");
    }
    if article_key.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return invalid("contains an empty or relative path segment");
    }
    if article_key.chars().any(char::is_control) {
        return invalid("contains control characters");
    }

    Ok(())
}
