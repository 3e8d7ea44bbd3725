//! Answer checking for practice exercises.
//!
//! Matching is exact after normalization: surrounding whitespace is trimmed,
//! inner whitespace runs collapse to one space, and case is folded. There is
//! no fuzzy matching and no partial credit.

use crate::model::Exercise;

/// Result of checking one answer against an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCheck {
    pub is_correct: bool,
    pub points_awarded: u32,
}

/// Normalize an answer for comparison.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Returns true when both answers are equal after normalization.
#[must_use]
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize_answer(given) == normalize_answer(expected)
}

/// Check a raw answer against the exercise's correct answer.
#[must_use]
pub fn check_answer(exercise: &Exercise, raw_answer: &str) -> AnswerCheck {
    let is_correct = answers_match(raw_answer, exercise.correct_answer());
    AnswerCheck {
        is_correct,
        points_awarded: if is_correct { exercise.points() } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExerciseType;

    fn vocab_exercise() -> Exercise {
        Exercise::new(
            ExerciseType::VocabularyMatch,
            "Match the words",
            vec!["Hola".into(), "Hello".into()],
            "Hola - Hello",
            10,
        )
        .unwrap()
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let exercise = vocab_exercise();
        let check = check_answer(&exercise, "  hola - hello ");
        assert!(check.is_correct);
        assert_eq!(check.points_awarded, 10);

        assert!(check_answer(&exercise, "HOLA   -   HELLO").is_correct);
    }

    #[test]
    fn reversed_pair_is_incorrect() {
        let check = check_answer(&vocab_exercise(), "Hello - Hola");
        assert!(!check.is_correct);
        assert_eq!(check.points_awarded, 0);
    }

    #[test]
    fn no_partial_credit() {
        assert!(!check_answer(&vocab_exercise(), "Hola").is_correct);
        assert!(!answers_match("", "Hola"));
    }
}
