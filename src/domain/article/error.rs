use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ArticleServiceError> for AppError {
    fn from(err: ArticleServiceError) -> Self {
        match err {
            ArticleServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            ArticleServiceError::Dependency(msg) => AppError::Storage(msg),
            ArticleServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
