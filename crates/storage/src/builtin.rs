//! Built-in fallback practice data.
//!
//! Used when the remote exercise source answers with nothing. Covers
//! vocabulary matching at A1 for Spanish, French and
//! English, and sentence building for English at every level.

use std::collections::BTreeMap;

use lingo_core::model::{
    Exercise, ExerciseError, ExerciseType, Language, Level, PracticeKey, PracticeSet,
    VocabularyItem,
};

use crate::repository::{FallbackEntry, StorageError};

struct MatchSeed {
    language: &'static str,
    partner: &'static str,
    words: [(&'static str, &'static str, &'static str); 4],
    hint: Option<&'static str>,
}

const MATCH_SEEDS: [MatchSeed; 3] = [
    MatchSeed {
        language: "Spanish",
        partner: "English",
        words: [
            ("la familia", "family", "Mi familia es grande"),
            ("la escuela", "school", "Voy a la escuela"),
            ("el trabajo", "work", "El trabajo es importante"),
            ("el restaurante", "restaurant", "Cenamos en el restaurante"),
        ],
        hint: Some("Remember that 'el' and 'la' are articles"),
    },
    MatchSeed {
        language: "French",
        partner: "English",
        words: [
            ("la famille", "family", "Ma famille est grande"),
            ("l'école", "school", "Je vais à l'école"),
            ("le travail", "work", "Le travail est important"),
            ("le restaurant", "restaurant", "On dîne au restaurant"),
        ],
        hint: None,
    },
    MatchSeed {
        language: "English",
        partner: "Spanish",
        words: [
            ("family", "la familia", "My family is big"),
            ("school", "la escuela", "I go to school"),
            ("work", "el trabajo", "Work is important"),
            ("restaurant", "el restaurante", "We dine at the restaurant"),
        ],
        hint: Some("Remember the context of each word"),
    },
];

fn language(name: &str) -> Result<Language, StorageError> {
    Language::new(name).ok_or_else(|| StorageError::Serialization(format!("blank language: {name:?}")))
}

fn match_entry(seed: &MatchSeed) -> Result<FallbackEntry, StorageError> {
    let mut options: Vec<String> = seed.words.iter().map(|(word, _, _)| (*word).to_owned()).collect();
    options.extend(seed.words.iter().map(|(_, translation, _)| (*translation).to_owned()));

    let pairs = seed
        .words
        .iter()
        .map(|(word, translation, _)| ((*word).to_owned(), (*translation).to_owned()))
        .collect::<BTreeMap<_, _>>();

    let (first_word, first_translation, _) = seed.words[0];
    let mut exercise = Exercise::new(
        ExerciseType::VocabularyMatch,
        "Match the words with their meanings",
        options,
        format!("{first_word} - {first_translation}"),
        10,
    )?
    .with_explanation(format!(
        "Match each {} word with its {} translation",
        seed.language, seed.partner
    ))
    .with_difficulty(Level::A1)
    .with_pairs(pairs);
    if let Some(hint) = seed.hint {
        exercise = exercise.with_hints(vec![hint.to_owned()]);
    }

    let vocabulary = seed
        .words
        .iter()
        .map(|(word, translation, usage)| VocabularyItem::new(*word, *translation, *usage))
        .collect();

    Ok(FallbackEntry {
        key: PracticeKey::new(language(seed.language)?, ExerciseType::VocabularyMatch, Level::A1),
        set: PracticeSet::new(vec![exercise], vocabulary),
    })
}

fn sentence_builder_exercise(level: Level) -> Result<Exercise, ExerciseError> {
    let words = ["I", "would", "like", "to", "learn", "more"];
    Ok(Exercise::new(
        ExerciseType::SentenceBuilder,
        "Arrange the words to form a complete sentence",
        words.iter().map(|w| (*w).to_owned()).collect(),
        words.join(" "),
        10,
    )?
    .with_explanation("This is a polite way to express desire using 'would like to'")
    .with_difficulty(level))
}

/// All built-in fallback entries.
///
/// # Errors
///
/// Returns `StorageError::InvalidEntry` if a built-in exercise fails validation.
pub fn entries() -> Result<Vec<FallbackEntry>, StorageError> {
    let mut entries = MATCH_SEEDS
        .iter()
        .map(match_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let english = language("English")?;
    for level in Level::ALL {
        entries.push(FallbackEntry {
            key: PracticeKey::new(english.clone(), ExerciseType::SentenceBuilder, level),
            set: PracticeSet::new(vec![sentence_builder_exercise(level)?], Vec::new()),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_entries_are_valid() {
        let entries = entries().unwrap();
        assert_eq!(entries.len(), MATCH_SEEDS.len() + Level::ALL.len());
        assert!(entries.iter().all(|entry| !entry.set.is_empty()));
    }

    #[test]
    fn spanish_match_pairs_words_with_translations() {
        let entries = entries().unwrap();
        let spanish = entries
            .iter()
            .find(|entry| entry.key.language.name() == "Spanish")
            .unwrap();
        let exercise = &spanish.set.exercises()[0];

        assert_eq!(exercise.options().len(), 8);
        assert_eq!(exercise.correct_answer(), "la familia - family");
        assert_eq!(exercise.pairs().len(), 4);
        assert_eq!(spanish.set.vocabulary().len(), 4);
        assert_eq!(exercise.hints().len(), 1);
    }

    #[test]
    fn sentence_builder_difficulty_tracks_level() {
        let entries = entries().unwrap();
        let c1 = entries
            .iter()
            .find(|entry| entry.key.kind == ExerciseType::SentenceBuilder && entry.key.level == Level::C1)
            .unwrap();
        assert_eq!(c1.set.exercises()[0].difficulty(), Level::C1);
        assert_eq!(c1.set.exercises()[0].correct_answer(), "I would like to learn more");
    }
}
