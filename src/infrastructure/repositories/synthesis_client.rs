use crate::domain::narration::VoiceProfile;
use async_trait::async_trait;

/// Client for the external text-to-speech provider (AWS Polly in production).
///
/// Implementations make exactly one provider call per invocation and never
/// retry.
#[async_trait]
pub trait SpeechSynthesisClient: Send + Sync {
    /// Synthesize one chunk of SSML body markup with the given voice
    ///
    /// Returns the encoded MP3 bytes for that chunk
    ///
    /// # Arguments
    /// * `markup` - Escaped chunk text, possibly ending in a pause directive.
    ///   The implementation wraps it in the `<speak>` root.
    /// * `voice` - Voice, engine tier and locale to synthesize with
    ///
    /// # Errors
    /// Returns the provider's rejection detail (quota, malformed markup,
    /// unsupported voice, transport failure)
    async fn synthesize(&self, markup: &str, voice: &VoiceProfile) -> Result<Vec<u8>, String>;
}
