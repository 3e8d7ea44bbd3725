use chrono::{DateTime, Utc};
use std::fmt;
use lingo_core::answer::check_answer;
use lingo_core::model::{Exercise, PracticeKey, PracticeSet, PracticeSummary, QuestionOutcome};

use crate::error::PracticeError;
use super::progress::PracticeProgress;

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// What the learner sees right after answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub is_correct: bool,
    pub points: u32,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a practice set.
///
/// Enforces answer → feedback → advance: every question is scored exactly
/// once, and the cursor only moves after feedback has been shown.
pub struct PracticeSession {
    key: PracticeKey,
    set: PracticeSet,
    current: usize,
    score: u32,
    feedback: Option<Feedback>,
    outcomes: Vec<QuestionOutcome>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl PracticeSession {
    /// # Errors
    ///
    /// Returns `PracticeError::NoExercises` if the set is empty.
    pub fn new(
        key: PracticeKey,
        set: PracticeSet,
        started_at: DateTime<Utc>,
    ) -> Result<Self, PracticeError> {
        if set.is_empty() {
            return Err(PracticeError::NoExercises(key));
        }

        Ok(Self {
            key,
            set,
            current: 0,
            score: 0,
            feedback: None,
            outcomes: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn key(&self) -> &PracticeKey {
        &self.key
    }

    #[must_use]
    pub fn set(&self) -> &PracticeSet {
        &self.set
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// True once the current question has been answered.
    #[must_use]
    pub fn show_explanation(&self) -> bool {
        self.feedback.is_some()
    }

    /// The current exercise's explanation, once it may be shown.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        if self.show_explanation() {
            self.current_exercise().map(Exercise::explanation)
        } else {
            None
        }
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.set.get(self.current)
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    fn is_last(&self) -> bool {
        self.current + 1 >= self.set.len()
    }

    #[must_use]
    pub fn progress(&self) -> PracticeProgress {
        PracticeProgress {
            total: self.set.len(),
            answered: self.outcomes.len(),
            position: self.current + 1,
            score: self.score,
            max_score: self.set.max_score(),
            is_complete: self.is_complete(),
        }
    }

    /// Check an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Completed` after the last question, or
    /// `PracticeError::AlreadyAnswered` if this question already has feedback.
    pub fn submit_answer(&mut self, raw_answer: &str) -> Result<Feedback, PracticeError> {
        if self.is_complete() {
            return Err(PracticeError::Completed);
        }
        if self.feedback.is_some() {
            return Err(PracticeError::AlreadyAnswered);
        }
        let exercise = self.current_exercise().ok_or(PracticeError::Completed)?;

        let check = check_answer(exercise, raw_answer);
        let feedback = Feedback {
            is_correct: check.is_correct,
            points: check.points_awarded,
        };

        self.score = self.score.saturating_add(check.points_awarded);
        self.outcomes.push(QuestionOutcome {
            index: self.current,
            answer: raw_answer.to_string(),
            is_correct: check.is_correct,
            points_awarded: check.points_awarded,
        });
        self.feedback = Some(feedback);
        Ok(feedback)
    }

    /// Move past the answered question.
    ///
    /// `now` stamps completion when this was the last question. A clock that
    /// stepped backwards is clamped to the start time.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::FeedbackPending` if the question is unanswered,
    /// or `PracticeError::Completed` if the set is already finished.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, PracticeError> {
        if self.is_complete() {
            return Err(PracticeError::Completed);
        }
        if self.feedback.is_none() {
            return Err(PracticeError::FeedbackPending);
        }

        if self.is_last() {
            self.completed_at = Some(now.max(self.started_at));
            return Ok(Advance::Finished);
        }

        self.current += 1;
        self.feedback = None;
        Ok(Advance::Next {
            index: self.current,
        })
    }

    /// Summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotCompleted` before the last question is passed.
    pub fn summary(&self) -> Result<PracticeSummary, PracticeError> {
        let completed_at = self.completed_at.ok_or(PracticeError::NotCompleted)?;
        Ok(PracticeSummary::from_outcomes(
            self.key.clone(),
            self.started_at,
            completed_at,
            &self.outcomes,
            self.set.max_score(),
        )?)
    }
}

impl fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("key", &self.key)
            .field("exercises_len", &self.set.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("feedback", &self.feedback)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::model::{ExerciseType, Level};
    use lingo_core::time::fixed_now;

    fn exercise(answer: &str, points: u32) -> Exercise {
        Exercise::new(
            ExerciseType::VocabularyMatch,
            "Match the words",
            vec!["Hola".into(), "Hello".into()],
            answer,
            points,
        )
        .unwrap()
        .with_explanation(format!("{answer} is the pair"))
    }

    fn session(exercises: Vec<Exercise>) -> PracticeSession {
        let key = PracticeKey::parse("Spanish", ExerciseType::VocabularyMatch, Level::A1).unwrap();
        PracticeSession::new(key, PracticeSet::new(exercises, Vec::new()), fixed_now()).unwrap()
    }

    #[test]
    fn empty_set_is_rejected() {
        let key = PracticeKey::parse("French", ExerciseType::WordPuzzle, Level::C2).unwrap();
        let err = PracticeSession::new(key, PracticeSet::default(), fixed_now()).unwrap_err();
        assert!(matches!(err, PracticeError::NoExercises(_)));
    }

    #[test]
    fn correct_answer_scores_points_once() {
        let mut session = session(vec![exercise("Hola - Hello", 10), exercise("Adiós - Bye", 5)]);

        let feedback = session.submit_answer("hola - hello").unwrap();
        assert_eq!(feedback, Feedback { is_correct: true, points: 10 });
        assert_eq!(session.score(), 10);
        assert!(session.show_explanation());
        assert_eq!(session.explanation(), Some("Hola - Hello is the pair"));

        let err = session.submit_answer("hola - hello").unwrap_err();
        assert!(matches!(err, PracticeError::AlreadyAnswered));
        assert_eq!(session.score(), 10);
        assert_eq!(session.outcomes().len(), 1);
    }

    #[test]
    fn incorrect_answer_still_shows_explanation() {
        let mut session = session(vec![exercise("Hola - Hello", 10)]);
        let feedback = session.submit_answer("Hello - Hola").unwrap();
        assert_eq!(feedback, Feedback { is_correct: false, points: 0 });
        assert_eq!(session.score(), 0);
        assert!(session.show_explanation());
    }

    #[test]
    fn advance_requires_feedback_first() {
        let mut session = session(vec![exercise("a", 1), exercise("b", 1)]);
        assert!(session.explanation().is_none());
        let err = session.advance(fixed_now()).unwrap_err();
        assert!(matches!(err, PracticeError::FeedbackPending));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_moves_cursor_and_clears_feedback() {
        let mut session = session(vec![exercise("a", 1), exercise("b", 1)]);
        session.submit_answer("a").unwrap();

        assert_eq!(session.advance(fixed_now()).unwrap(), Advance::Next { index: 1 });
        assert_eq!(session.current_index(), 1);
        assert!(session.feedback().is_none());
        assert!(!session.show_explanation());
    }

    #[test]
    fn last_question_completes_without_overrunning() {
        let mut session = session(vec![exercise("a", 3), exercise("b", 4)]);
        session.submit_answer("a").unwrap();
        session.advance(fixed_now()).unwrap();
        session.submit_answer("wrong").unwrap();

        assert_eq!(session.advance(fixed_now()).unwrap(), Advance::Finished);
        assert!(session.is_complete());
        assert_eq!(session.current_index(), 1);
        assert!(session.current_exercise().is_some());

        assert!(matches!(session.advance(fixed_now()), Err(PracticeError::Completed)));
        assert!(matches!(session.submit_answer("b"), Err(PracticeError::Completed)));

        let summary = session.summary().unwrap();
        assert_eq!(summary.total_questions(), 2);
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.score(), 3);
        assert_eq!(summary.max_score(), 7);
    }

    #[test]
    fn completion_before_start_is_clamped() {
        let mut session = session(vec![exercise("a", 1)]);
        session.submit_answer("a").unwrap();

        let earlier = fixed_now() - chrono::Duration::seconds(30);
        assert_eq!(session.advance(earlier).unwrap(), Advance::Finished);
        assert_eq!(session.completed_at(), Some(fixed_now()));

        let summary = session.summary().unwrap();
        assert_eq!(summary.duration(), chrono::Duration::zero());
        assert_eq!(summary.score(), 1);
    }

    #[test]
    fn summary_requires_completion() {
        let session = session(vec![exercise("a", 1)]);
        assert!(matches!(session.summary(), Err(PracticeError::NotCompleted)));
    }

    #[test]
    fn progress_reports_position() {
        let mut session = session(vec![exercise("a", 2), exercise("b", 2), exercise("c", 2)]);
        session.submit_answer("a").unwrap();
        session.advance(fixed_now()).unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.position, 2);
        assert_eq!(progress.score, 2);
        assert_eq!(progress.max_score, 6);
        assert!(!progress.is_complete);
    }
}
