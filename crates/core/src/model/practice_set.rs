use serde::{Deserialize, Serialize};

use crate::model::Exercise;

/// A word with its translation and an example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub usage: String,
}

impl VocabularyItem {
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            usage: usage.into(),
        }
    }
}

/// Ordered batch of exercises returned by one generation request.
///
/// Sets are replaced as a whole; there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PracticeSet {
    exercises: Vec<Exercise>,
    #[serde(default)]
    vocabulary: Vec<VocabularyItem>,
}

impl PracticeSet {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>, vocabulary: Vec<VocabularyItem>) -> Self {
        Self {
            exercises,
            vocabulary,
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[VocabularyItem] {
        &self.vocabulary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Exercise>, Vec<VocabularyItem>) {
        (self.exercises, self.vocabulary)
    }

    /// Sum of the points of every exercise in the set.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.exercises
            .iter()
            .fold(0_u32, |acc, exercise| acc.saturating_add(exercise.points()))
    }
}
