use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ExerciseType, Level, LevelError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise question cannot be empty")]
    EmptyQuestion,

    #[error("exercise correct answer cannot be empty")]
    EmptyCorrectAnswer,

    #[error(transparent)]
    Difficulty(#[from] LevelError),
}

//
// ─── WIRE SHAPE ────────────────────────────────────────────────────────────────
//

fn default_points() -> u32 {
    10
}

/// Exercise as it travels over the wire or sits in a fallback file.
///
/// Missing optional fields take the same defaults the exercise generator uses:
/// 10 points, `A1` difficulty, empty explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub pairs: BTreeMap<String, String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub time_limit: Option<u32>,
}

impl From<Exercise> for ExerciseRecord {
    fn from(exercise: Exercise) -> Self {
        Self {
            kind: exercise.kind,
            question: exercise.question,
            options: exercise.options,
            correct_answer: exercise.correct_answer,
            explanation: exercise.explanation,
            difficulty: Some(exercise.difficulty.as_str().to_owned()),
            points: exercise.points,
            hints: exercise.hints,
            pairs: exercise.pairs,
            context: exercise.context,
            time_limit: exercise.time_limit_secs,
        }
    }
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

/// One question unit inside a practice set.
///
/// Immutable once built; the session only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseRecord", into = "ExerciseRecord")]
pub struct Exercise {
    kind: ExerciseType,
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
    difficulty: Level,
    points: u32,
    hints: Vec<String>,
    pairs: BTreeMap<String, String>,
    context: Option<String>,
    time_limit_secs: Option<u32>,
}

impl Exercise {
    /// Build an exercise with the required fields.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::EmptyQuestion` or `ExerciseError::EmptyCorrectAnswer`
    /// when either is blank.
    pub fn new(
        kind: ExerciseType,
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        points: u32,
    ) -> Result<Self, ExerciseError> {
        let question = question.into();
        let correct_answer = correct_answer.into();
        if question.trim().is_empty() {
            return Err(ExerciseError::EmptyQuestion);
        }
        if correct_answer.trim().is_empty() {
            return Err(ExerciseError::EmptyCorrectAnswer);
        }

        Ok(Self {
            kind,
            question,
            options,
            correct_answer,
            explanation: String::new(),
            difficulty: Level::A1,
            points,
            hints: Vec::new(),
            pairs: BTreeMap::new(),
            context: None,
            time_limit_secs: None,
        })
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Level) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub fn with_pairs(mut self, pairs: BTreeMap<String, String>) -> Self {
        self.pairs = pairs;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_time_limit_secs(mut self, secs: u32) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ExerciseType {
        &self.kind
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Candidate words or answers. Order matters for sentence building.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Level {
        self.difficulty
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Word → translation pairs for matching exercises.
    #[must_use]
    pub fn pairs(&self) -> &BTreeMap<String, String> {
        &self.pairs
    }

    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit_secs
    }
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = ExerciseError;

    fn try_from(record: ExerciseRecord) -> Result<Self, Self::Error> {
        let difficulty = match record.difficulty.as_deref() {
            None => Level::A1,
            Some(raw) => raw.parse()?,
        };

        let mut exercise = Exercise::new(
            record.kind,
            record.question,
            record.options,
            record.correct_answer,
            record.points,
        )?
        .with_explanation(record.explanation)
        .with_difficulty(difficulty)
        .with_hints(record.hints)
        .with_pairs(record.pairs);
        exercise.context = record.context;
        exercise.time_limit_secs = record.time_limit;
        Ok(exercise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_question_and_answer() {
        let err = Exercise::new(ExerciseType::WordPuzzle, "  ", vec![], "a", 5).unwrap_err();
        assert_eq!(err, ExerciseError::EmptyQuestion);

        let err = Exercise::new(ExerciseType::WordPuzzle, "Pick", vec![], "", 5).unwrap_err();
        assert_eq!(err, ExerciseError::EmptyCorrectAnswer);
    }

    #[test]
    fn decodes_wire_record_with_defaults() {
        let json = r#"{
            "type": "sentence-builder",
            "question": "Arrange the words",
            "options": ["I", "would", "like"],
            "correct_answer": "I would like"
        }"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();

        assert_eq!(exercise.kind(), &ExerciseType::SentenceBuilder);
        assert_eq!(exercise.points(), 10);
        assert_eq!(exercise.difficulty(), Level::A1);
        assert_eq!(exercise.options().len(), 3);
        assert!(exercise.explanation().is_empty());
    }

    #[test]
    fn decode_rejects_unknown_difficulty() {
        let json = r#"{
            "type": "word-puzzle",
            "question": "Pick a letter",
            "correct_answer": "a",
            "difficulty": "progressive"
        }"#;
        assert!(serde_json::from_str::<Exercise>(json).is_err());
    }

    #[test]
    fn decode_keeps_pairs_and_hints() {
        let json = r#"{
            "type": "vocabulary-match",
            "question": "Match",
            "options": ["la familia", "family"],
            "correct_answer": "la familia - family",
            "pairs": {"la familia": "family"},
            "hints": ["articles"],
            "difficulty": "a2",
            "points": 15
        }"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.pairs().get("la familia").map(String::as_str), Some("family"));
        assert_eq!(exercise.hints(), ["articles".to_string()]);
        assert_eq!(exercise.difficulty(), Level::A2);
        assert_eq!(exercise.points(), 15);
    }
}
