pub mod article_repository;
pub mod polly_synthesis_client;
pub mod synthesis_client;

pub use article_repository::{ArticleRepository, ObjectStoreArticleRepository, StorageError};
pub use polly_synthesis_client::PollySynthesisClient;
pub use synthesis_client::SpeechSynthesisClient;
