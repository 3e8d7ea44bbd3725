use thiserror::Error;

use crate::model::{ExerciseError, LevelError, PracticeKeyError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    PracticeKey(#[from] PracticeKeyError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
