use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ExerciseType, Language, Level};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeKeyError {
    #[error("language cannot be empty")]
    EmptyLanguage,
}

/// The `{language, type, level}` triple that identifies one practice request.
///
/// Also the lookup key of the local fallback table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PracticeKey {
    pub language: Language,
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    pub level: Level,
}

impl PracticeKey {
    #[must_use]
    pub fn new(language: Language, kind: ExerciseType, level: Level) -> Self {
        Self {
            language,
            kind,
            level,
        }
    }

    /// Build a key from a raw language name.
    ///
    /// # Errors
    ///
    /// Returns `PracticeKeyError::EmptyLanguage` for a blank name.
    pub fn parse(
        language: &str,
        kind: ExerciseType,
        level: Level,
    ) -> Result<Self, PracticeKeyError> {
        let language = Language::new(language).ok_or(PracticeKeyError::EmptyLanguage)?;
        Ok(Self::new(language, kind, level))
    }
}

impl fmt::Display for PracticeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.language, self.kind, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_language() {
        let err = PracticeKey::parse(" ", ExerciseType::WordPuzzle, Level::A1).unwrap_err();
        assert_eq!(err, PracticeKeyError::EmptyLanguage);
    }

    #[test]
    fn display_joins_parts() {
        let key = PracticeKey::parse("French", ExerciseType::WordPuzzle, Level::C2).unwrap();
        assert_eq!(key.to_string(), "French/word-puzzle/C2");
    }
}
