#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod practice;
pub mod source;
pub mod speech;

pub use lingo_core::Clock;

pub use config::PracticeConfig;
pub use error::{ConfigError, PracticeError, SourceError, SpeechError};
pub use practice::{
    Feedback, LoadOutcome, LoadTicket, PracticeController, PracticeLoopService, PracticeNotice,
    PracticePhase, PracticeProgress,
};
pub use source::{ExerciseSource, FallbackExerciseSource, HttpExerciseSource};
pub use speech::{SilentSynthesizer, SpeechService, SpeechSynthesizer};
