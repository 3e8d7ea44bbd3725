use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of interaction an exercise asks for.
///
/// Wire names are kebab-case (`vocabulary-match`, `sentence-builder`, ...).
/// Names the client does not know are preserved in `Unrecognized` so the UI
/// can show them instead of guessing a fallback kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseType {
    VocabularyMatch,
    SentenceBuilder,
    ListeningChallenge,
    PronunciationGame,
    WordPuzzle,
    ConversationSim,
    MemoryCards,
    FillBlanks,
    Unrecognized(String),
}

impl ExerciseType {
    /// Every kind the backend is known to generate, in menu order.
    pub const KNOWN: [ExerciseType; 8] = [
        ExerciseType::VocabularyMatch,
        ExerciseType::SentenceBuilder,
        ExerciseType::ListeningChallenge,
        ExerciseType::PronunciationGame,
        ExerciseType::WordPuzzle,
        ExerciseType::ConversationSim,
        ExerciseType::MemoryCards,
        ExerciseType::FillBlanks,
    ];

    /// Wire name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ExerciseType::VocabularyMatch => "vocabulary-match",
            ExerciseType::SentenceBuilder => "sentence-builder",
            ExerciseType::ListeningChallenge => "listening-challenge",
            ExerciseType::PronunciationGame => "pronunciation-game",
            ExerciseType::WordPuzzle => "word-puzzle",
            ExerciseType::ConversationSim => "conversation-sim",
            ExerciseType::MemoryCards => "memory-cards",
            ExerciseType::FillBlanks => "fill-blanks",
            ExerciseType::Unrecognized(name) => name.as_str(),
        }
    }

    /// Human-readable label, e.g. "Vocabulary Match".
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect::<String>()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ExerciseType::Unrecognized(_))
    }
}

impl From<String> for ExerciseType {
    fn from(raw: String) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::KNOWN
            .iter()
            .find(|kind| kind.as_str() == normalized)
            .cloned()
            .unwrap_or(ExerciseType::Unrecognized(raw))
    }
}

impl From<ExerciseType> for String {
    fn from(kind: ExerciseType) -> Self {
        kind.as_str().to_owned()
    }
}

impl FromStr for ExerciseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
