use super::assembler::assemble;
use super::error::NarrationServiceError;
use super::model::AudioStream;
use super::orchestrator::SynthesisOrchestrator;
use super::voice::VoiceProfile;
use crate::infrastructure::repositories::{ArticleRepository, StorageError};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct NarrationResult {
    pub audio: AudioStream,
    pub voice: VoiceProfile,
    pub fragment_count: usize,
}

#[derive(Debug, Clone)]
pub struct ArticleAudio {
    pub article_key: String,
    pub audio_key: String,
    pub voice: VoiceProfile,
    pub fragment_count: usize,
    pub audio_size_bytes: usize,
}

pub struct NarrationService {
    orchestrator: SynthesisOrchestrator,
    article_repo: Arc<dyn ArticleRepository>,
}

impl NarrationService {
    pub fn new(orchestrator: SynthesisOrchestrator, article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self {
            orchestrator,
            article_repo,
        }
    }
}

#[async_trait]
pub trait NarrationServiceApi: Send + Sync {
    /// Turn paragraphs into a single MP3 stream
    ///
    /// The voice is picked from `language`; unknown or missing codes use the
    /// fallback voice. Nothing is persisted.
    async fn narrate(
        &self,
        paragraphs: Vec<String>,
        language: Option<String>,
    ) -> Result<NarrationResult, NarrationServiceError>;

    /// Generate and store the audio for a stored article
    ///
    /// This operation:
    /// - Loads the article record stored under `article_key`
    /// - Synthesizes and assembles its paragraphs
    /// - Stores the MP3 next to the record
    ///
    /// Audio is only written when every chunk synthesized successfully.
    async fn generate_article_audio(
        &self,
        article_key: &str,
    ) -> Result<ArticleAudio, NarrationServiceError>;
}

#[async_trait]
impl NarrationServiceApi for NarrationService {
    async fn narrate(
        &self,
        paragraphs: Vec<String>,
        language: Option<String>,
    ) -> Result<NarrationResult, NarrationServiceError> {
        let start_time = Instant::now();
        let voice = self.orchestrator.resolve_voice(language.as_deref());
        let characters_count: usize = paragraphs.iter().map(|p| p.chars().count()).sum();

        tracing::info!(
            paragraph_count = paragraphs.len(),
            characters_count,
            language = language.as_deref().unwrap_or("none"),
            voice = voice.voice_id,
            engine = %voice.engine,
            "Narration requested"
        );

        let fragments = self
            .orchestrator
            .synthesize_paragraphs(&paragraphs, voice)
            .await?;
        let fragment_count = fragments.len();
        let audio = assemble(fragments);

        let duration = start_time.elapsed();
        let throughput_chars_per_sec = if duration.as_secs_f64() > 0.0 {
            characters_count as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        tracing::info!(
            provider = "polly",
            latency_ms = duration.as_millis(),
            characters_count,
            fragment_count,
            audio_size_bytes = audio.len(),
            throughput_chars_per_sec = format!("{:.2}", throughput_chars_per_sec),
            "Narration completed"
        );

        Ok(NarrationResult {
            audio,
            voice,
            fragment_count,
        })
    }

    async fn generate_article_audio(
        &self,
        article_key: &str,
    ) -> Result<ArticleAudio, NarrationServiceError> {
        let content = self
            .article_repo
            .load_content(article_key)
            .await
            .map_err(|e| map_storage_error(article_key, e))?;

        let result = self.narrate(content.paragraphs, content.language).await?;
        let audio_size_bytes = result.audio.len();

        let audio_key = self
            .article_repo
            .save_audio(article_key, result.audio.into_bytes())
            .await
            .map_err(|e| map_storage_error(article_key, e))?;

        tracing::info!(
            article_key,
            audio_key = %audio_key,
            audio_size_bytes,
            "Article audio stored"
        );

        Ok(ArticleAudio {
            article_key: article_key.to_string(),
            audio_key,
            voice: result.voice,
            fragment_count: result.fragment_count,
            audio_size_bytes,
        })
    }
}

fn map_storage_error(article_key: &str, err: StorageError) -> NarrationServiceError {
    match err {
        StorageError::NotFound(_) => NarrationServiceError::ArticleNotFound(article_key.to_string()),
        StorageError::InvalidKey(msg) => NarrationServiceError::MalformedInput(msg),
        StorageError::Malformed(e) => {
            NarrationServiceError::MalformedInput(format!("article record is not valid: {}", e))
        }
        other => NarrationServiceError::Dependency(other.to_string()),
    }
}
