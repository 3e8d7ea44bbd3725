use std::sync::Arc;

use async_trait::async_trait;
use lingo_core::model::{PracticeKey, PracticeSet};
use storage::FallbackRepository;

use crate::error::SourceError;
use crate::source::ExerciseSource;

/// Wraps a primary source and consults the local fallback table when the
/// primary succeeds with nothing.
///
/// Transport and shape failures pass through untouched: only an empty result
/// is eligible for fallback. An empty or missing fallback entry yields
/// `SourceError::EmptyResult` again, so callers stop there.
#[derive(Clone)]
pub struct FallbackExerciseSource {
    primary: Arc<dyn ExerciseSource>,
    fallback: Arc<dyn FallbackRepository>,
}

impl FallbackExerciseSource {
    #[must_use]
    pub fn new(primary: Arc<dyn ExerciseSource>, fallback: Arc<dyn FallbackRepository>) -> Self {
        Self { primary, fallback }
    }

    async fn from_fallback(&self, key: &PracticeKey) -> Result<PracticeSet, SourceError> {
        match self.fallback.lookup(key).await? {
            Some(set) if !set.is_empty() => {
                tracing::info!(%key, exercises = set.len(), "serving fallback exercises");
                Ok(set)
            }
            _ => {
                tracing::info!(%key, "no fallback exercises");
                Err(SourceError::EmptyResult)
            }
        }
    }
}

#[async_trait]
impl ExerciseSource for FallbackExerciseSource {
    async fn fetch(&self, key: &PracticeKey) -> Result<PracticeSet, SourceError> {
        match self.primary.fetch(key).await {
            Ok(set) if set.is_empty() => self.from_fallback(key).await,
            Err(SourceError::EmptyResult) => self.from_fallback(key).await,
            Err(err) => {
                tracing::warn!(%key, error = %err, "exercise source failed");
                Err(err)
            }
            ok => ok,
        }
    }
}
