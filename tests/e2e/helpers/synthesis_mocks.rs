use async_trait::async_trait;
use narrator_backend::domain::narration::VoiceProfile;
use narrator_backend::infrastructure::repositories::SpeechSynthesisClient;
use parking_lot::Mutex;
use std::time::Duration;

/// Any chunk containing this text is rejected like a Polly error would be
pub const FAILING_TEXT: &str = "FAIL-SYNTHESIS";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub markup: String,
    pub voice_id: &'static str,
    pub engine: String,
    pub locale: &'static str,
}

/// Stand-in for AWS Polly: returns the chunk markup as its audio bytes.
///
/// The first calls sleep 30, 20 and 10ms and later ones not at all, so the
/// chunks of a request complete in reverse dispatch order.
pub struct FakeSynthesisClient {
    calls: Mutex<Vec<RecordedCall>>,
    completed: Mutex<Vec<String>>,
}

impl FakeSynthesisClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    /// Calls in dispatch order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Markup of each call in the order the calls finished
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().clone()
    }
}

#[async_trait]
impl SpeechSynthesisClient for FakeSynthesisClient {
    async fn synthesize(&self, markup: &str, voice: &VoiceProfile) -> Result<Vec<u8>, String> {
        let sequence = {
            let mut calls = self.calls.lock();
            calls.push(RecordedCall {
                markup: markup.to_string(),
                voice_id: voice.voice_id,
                engine: voice.engine.to_string(),
                locale: voice.locale,
            });
            calls.len() as u64 - 1
        };

        let delay = 10 * 3u64.saturating_sub(sequence);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        self.completed.lock().push(markup.to_string());

        if markup.contains(FAILING_TEXT) {
            return Err("AWS Polly error: InvalidSsmlException".to_string());
        }

        Ok(markup.as_bytes().to_vec())
    }
}
