mod fallback;
mod http;

use async_trait::async_trait;
use lingo_core::model::{PracticeKey, PracticeSet};

use crate::error::SourceError;

pub use fallback::FallbackExerciseSource;
pub use http::HttpExerciseSource;

/// Anything that can produce a practice set for a `{language, type, level}` key.
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    /// Fetch the exercises for `key`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::EmptyResult` when the call succeeds with no exercises,
    /// and a transport, status, or shape error otherwise.
    async fn fetch(&self, key: &PracticeKey) -> Result<PracticeSet, SourceError>;
}
