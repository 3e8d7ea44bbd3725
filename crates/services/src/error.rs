//! Shared error types for the services crate.

use thiserror::Error;

use lingo_core::model::{LevelError, PracticeKey, SummaryError};
use storage::StorageError;

/// Errors emitted by exercise sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("exercise source unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("exercise source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("exercise source returned a malformed payload: {0}")]
    InvalidResponseShape(String),
    #[error("exercise source returned no exercises")]
    EmptyResult,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SourceError {
    /// The call succeeded but carried no content.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, SourceError::EmptyResult)
    }

    /// Failures the learner can retry by starting again.
    ///
    /// Malformed payloads are grouped with transport failures.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !self.is_empty_result()
    }
}

/// Errors emitted by speech synthesizers. Never fatal to the practice flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("nothing to speak")]
    EmptyText,
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("speech playback was interrupted")]
    Interrupted,
}

/// Errors emitted by the practice session and controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("no exercises available for {0}")]
    NoExercises(PracticeKey),
    #[error("no practice set is active")]
    NotActive,
    #[error("the current question has already been answered")]
    AlreadyAnswered,
    #[error("answer the current question before moving on")]
    FeedbackPending,
    #[error("practice set already completed")]
    Completed,
    #[error("practice set is not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error(transparent)]
    Level(#[from] LevelError),
}
