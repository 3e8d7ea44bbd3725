use std::sync::Arc;

use lingo_core::model::{PracticeKey, PracticeSet};
use rand::rng;
use rand::seq::SliceRandom;

use crate::Clock;
use crate::error::{PracticeError, SourceError};
use crate::source::ExerciseSource;
use super::controller::{LoadOutcome, LoadTicket, PracticeController};

/// Orchestrates loading practice sets into a controller.
///
/// The controller stays synchronous; this service runs the fetch and hands
/// the result back through the load ticket.
#[derive(Clone)]
pub struct PracticeLoopService {
    clock: Clock,
    source: Arc<dyn ExerciseSource>,
    shuffle_exercises: bool,
}

impl PracticeLoopService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn ExerciseSource>) -> Self {
        Self {
            clock,
            source,
            shuffle_exercises: false,
        }
    }

    #[must_use]
    pub fn with_shuffle_exercises(mut self, shuffle_exercises: bool) -> Self {
        self.shuffle_exercises = shuffle_exercises;
        self
    }

    /// A fresh idle controller sharing this service's clock.
    #[must_use]
    pub fn controller(&self) -> PracticeController {
        PracticeController::new(self.clock)
    }

    /// Fetch the set for `ticket` without touching any controller.
    ///
    /// # Errors
    ///
    /// Returns the source's `SourceError`.
    pub async fn fetch(&self, ticket: &LoadTicket) -> Result<PracticeSet, SourceError> {
        let set = self.source.fetch(ticket.key()).await?;
        if !self.shuffle_exercises {
            return Ok(set);
        }
        let (mut exercises, vocabulary) = set.into_parts();
        exercises.as_mut_slice().shuffle(&mut rng());
        Ok(PracticeSet::new(exercises, vocabulary))
    }

    /// Start `key` on `controller` and apply the fetched result.
    pub async fn start(&self, controller: &mut PracticeController, key: PracticeKey) -> LoadOutcome {
        let ticket = controller.start(key);
        let result = self.fetch(&ticket).await;
        controller.complete_load(ticket, result)
    }

    /// Reload the completed selection from question one.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotCompleted` unless the controller has finished a set.
    pub async fn practice_more(
        &self,
        controller: &mut PracticeController,
    ) -> Result<LoadOutcome, PracticeError> {
        let ticket = controller.practice_more()?;
        let result = self.fetch(&ticket).await;
        Ok(controller.complete_load(ticket, result))
    }
}
