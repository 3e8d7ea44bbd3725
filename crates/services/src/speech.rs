use std::sync::Arc;

use async_trait::async_trait;
use lingo_core::model::Language;

use crate::error::SpeechError;

/// Platform text-to-speech.
///
/// `speak` resolves once playback finishes, or fails on a synthesis error.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `SpeechError` when the utterance cannot be synthesized or played.
    async fn speak(&self, text: &str, language_tag: &str) -> Result<(), SpeechError>;
}

/// Synthesizer for hosts without a speech engine: logs the utterance and succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSynthesizer;

#[async_trait]
impl SpeechSynthesizer for SilentSynthesizer {
    async fn speak(&self, text: &str, language_tag: &str) -> Result<(), SpeechError> {
        tracing::debug!(language_tag, text, "speech requested without a speech engine");
        Ok(())
    }
}

/// Fire-and-forget speech for practice screens.
///
/// Failures are logged and swallowed; they never reach the exercise flow.
#[derive(Clone)]
pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechService {
    #[must_use]
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(SilentSynthesizer))
    }

    /// Speak and report the outcome.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::EmptyText` for blank text, or the synthesizer's error.
    pub async fn try_speak(&self, text: &str, language: &Language) -> Result<(), SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }
        self.synthesizer.speak(text, &language.speech_tag()).await
    }

    /// Speak, logging any failure instead of returning it.
    pub async fn speak(&self, text: &str, language: &Language) {
        if let Err(err) = self.try_speak(text, language).await {
            tracing::warn!(error = %err, language = %language, "speech failed");
        }
    }
}
