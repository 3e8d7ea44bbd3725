mod exercise;
mod exercise_type;
mod key;
mod language;
mod level;
mod practice_set;
mod session;

pub use exercise::{Exercise, ExerciseError, ExerciseRecord};
pub use exercise_type::ExerciseType;
pub use key::{PracticeKey, PracticeKeyError};
pub use language::{Language, speech_tag};
pub use level::{Level, LevelError};
pub use practice_set::{PracticeSet, VocabularyItem};
pub use session::{PracticeSummary, QuestionOutcome, SummaryError};
