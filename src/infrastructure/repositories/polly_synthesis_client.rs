use super::synthesis_client::SpeechSynthesisClient;
use crate::domain::narration::{markup, EngineTier, VoiceProfile};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, LanguageCode, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly implementation of the speech synthesis client
pub struct PollySynthesisClient {
    polly_client: Arc<PollyClient>,
}

impl PollySynthesisClient {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }
}

fn polly_engine(tier: EngineTier) -> Engine {
    match tier {
        EngineTier::Standard => Engine::Standard,
        EngineTier::Neural => Engine::Neural,
    }
}

#[async_trait]
impl SpeechSynthesisClient for PollySynthesisClient {
    async fn synthesize(&self, markup: &str, voice: &VoiceProfile) -> Result<Vec<u8>, String> {
        let ssml = markup::wrap_speak(markup);
        let engine = polly_engine(voice.engine);

        tracing::debug!(
            voice = voice.voice_id,
            engine = %voice.engine,
            locale = voice.locale,
            output_format = "Mp3",
            text_length = ssml.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(ssml.as_str())
            .text_type(TextType::Ssml)
            .voice_id(VoiceId::from(voice.voice_id))
            .language_code(LanguageCode::from(voice.locale))
            .engine(engine)
            .output_format(OutputFormat::Mp3)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice = voice.voice_id,
                    engine = %voice.engine,
                    locale = voice.locale,
                    text_length = ssml.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();
        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Audio stream collected successfully"
        );

        Ok(audio_bytes)
    }
}
