use super::chunker::TextChunker;
use super::error::NarrationServiceError;
use super::markup;
use super::model::{AudioFragment, TextChunk};
use super::voice::{VoiceConfigResolver, VoiceProfile};
use crate::infrastructure::repositories::SpeechSynthesisClient;
use futures::future::join_all;
use std::sync::Arc;

/// Drives chunking and synthesis for a whole article.
///
/// Paragraphs are synthesized one after another. Within a paragraph every
/// chunk is requested at once and the results are awaited together, so the
/// fragments come back indexed by chunk position whatever order the provider
/// answers in.
pub struct SynthesisOrchestrator {
    synthesis_client: Arc<dyn SpeechSynthesisClient>,
    voice_resolver: VoiceConfigResolver,
    chunker: TextChunker,
}

impl SynthesisOrchestrator {
    pub fn new(
        synthesis_client: Arc<dyn SpeechSynthesisClient>,
        voice_resolver: VoiceConfigResolver,
        chunker: TextChunker,
    ) -> Self {
        Self {
            synthesis_client,
            voice_resolver,
            chunker,
        }
    }

    pub fn resolve_voice(&self, language: Option<&str>) -> VoiceProfile {
        self.voice_resolver.resolve(language)
    }

    /// Synthesize every paragraph and return the fragments in narration order
    pub async fn run(
        &self,
        paragraphs: &[String],
        language: Option<&str>,
    ) -> Result<Vec<AudioFragment>, NarrationServiceError> {
        let voice = self.resolve_voice(language);
        self.synthesize_paragraphs(paragraphs, voice).await
    }

    /// Same as [`run`](Self::run) with the voice already resolved
    pub async fn synthesize_paragraphs(
        &self,
        paragraphs: &[String],
        voice: VoiceProfile,
    ) -> Result<Vec<AudioFragment>, NarrationServiceError> {
        validate_paragraphs(paragraphs)?;

        let mut fragments = Vec::new();

        for (paragraph_index, paragraph) in paragraphs.iter().enumerate() {
            let chunks = self.chunker.chunk(paragraph);

            tracing::debug!(
                paragraph_index,
                chunk_count = chunks.len(),
                paragraph_length = paragraph.chars().count(),
                "Dispatching paragraph chunks"
            );

            let paragraph_fragments = self
                .synthesize_paragraph(paragraph_index, &chunks, voice)
                .await?;
            fragments.extend(paragraph_fragments);
        }

        Ok(fragments)
    }

    async fn synthesize_paragraph(
        &self,
        paragraph_index: usize,
        chunks: &[TextChunk],
        voice: VoiceProfile,
    ) -> Result<Vec<AudioFragment>, NarrationServiceError> {
        let last_index = chunks.len().saturating_sub(1);
        let client = &self.synthesis_client;

        let calls = chunks.iter().map(|chunk| {
            let markup = markup::chunk_markup(&chunk.text, chunk.index == last_index);
            async move { client.synthesize(&markup, &voice).await }
        });

        // Every call runs to completion; results line up with `chunks`
        let results = join_all(calls).await;

        let mut fragments = Vec::with_capacity(chunks.len());
        let mut first_failure = None;

        for (chunk, result) in chunks.iter().zip(results) {
            match result {
                Ok(bytes) => fragments.push(AudioFragment {
                    paragraph_index,
                    chunk_index: chunk.index,
                    bytes,
                }),
                Err(message) => {
                    tracing::error!(
                        paragraph_index,
                        chunk_index = chunk.index,
                        error = %message,
                        "Chunk synthesis failed"
                    );
                    first_failure.get_or_insert(NarrationServiceError::SynthesisFailure {
                        paragraph_index,
                        chunk_index: chunk.index,
                        message,
                    });
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(fragments),
        }
    }
}

/// Reject input that would otherwise waste provider calls
fn validate_paragraphs(paragraphs: &[String]) -> Result<(), NarrationServiceError> {
    if paragraphs.is_empty() {
        return Err(NarrationServiceError::MalformedInput(
            "article has no paragraphs".to_string(),
        ));
    }

    if let Some(index) = paragraphs.iter().position(|p| p.trim().is_empty()) {
        return Err(NarrationServiceError::MalformedInput(format!(
            "paragraph {} is empty",
            index
        )));
    }

    Ok(())
}
