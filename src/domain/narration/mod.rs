pub mod assembler;
pub mod chunker;
pub mod error;
pub mod markup;
pub mod model;
pub mod orchestrator;
pub mod service;
pub mod voice;

pub use assembler::assemble;
pub use chunker::{ChunkStrategy, TextChunker, DEFAULT_MAX_CHUNK_SIZE};
pub use error::{NarrationConfigError, NarrationServiceError};
pub use model::{AudioFragment, AudioStream, TextChunk};
pub use orchestrator::SynthesisOrchestrator;
pub use service::{ArticleAudio, NarrationResult, NarrationService, NarrationServiceApi};
pub use voice::{EngineTier, VoiceConfigResolver, VoiceProfile};

use serde::{Deserialize, Serialize};

/// Request for POST /api/narrate
#[derive(Debug, Serialize, Deserialize)]
pub struct NarrateRequest {
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response for POST /api/articles/:articleKey/audio
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAudioResponse {
    pub article_key: String,
    pub audio_key: String,
    pub voice_id: String,
    pub fragment_count: usize,
    pub audio_size_bytes: usize,
}

impl From<ArticleAudio> for ArticleAudioResponse {
    fn from(audio: ArticleAudio) -> Self {
        Self {
            article_key: audio.article_key,
            audio_key: audio.audio_key,
            voice_id: audio.voice.voice_id.to_string(),
            fragment_count: audio.fragment_count,
            audio_size_bytes: audio.audio_size_bytes,
        }
    }
}
