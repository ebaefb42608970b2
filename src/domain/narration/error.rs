use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum NarrationServiceError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("synthesis failed for paragraph {paragraph_index}, chunk {chunk_index}: {message}")]
    SynthesisFailure {
        paragraph_index: usize,
        chunk_index: usize,
        message: String,
    },
    #[error("article not found: {0}")]
    ArticleNotFound(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<NarrationServiceError> for AppError {
    fn from(err: NarrationServiceError) -> Self {
        match err {
            NarrationServiceError::MalformedInput(msg) => AppError::InvalidInput(msg),
            NarrationServiceError::ArticleNotFound(key) => {
                AppError::NotFound(format!("Article {}", key))
            }
            err @ NarrationServiceError::SynthesisFailure { .. } => {
                AppError::SynthesisProvider(err.to_string())
            }
            NarrationServiceError::Dependency(msg) => AppError::Storage(msg),
            NarrationServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Startup-time configuration problems for the narration pipeline
#[derive(Debug, thiserror::Error)]
pub enum NarrationConfigError {
    #[error("no voice configured for fallback language '{0}'")]
    UnknownFallbackLanguage(String),
    #[error("max chunk size must be greater than zero")]
    ZeroChunkSize,
}
