use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::PracticeKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many answers for a single session: {len}")]
    TooManyAnswers { len: usize },

    #[error("score ({score}) exceeds the maximum possible ({max_score})")]
    ScoreOverflow { score: u32, max_score: u32 },
}

/// Outcome of the first (and only scored) answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub index: usize,
    pub answer: String,
    pub is_correct: bool,
    pub points_awarded: u32,
}

/// Aggregate result of a finished practice set.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSummary {
    key: PracticeKey,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
    correct: u32,
    score: u32,
    max_score: u32,
}

impl PracticeSummary {
    /// Build a summary from the per-question outcomes of a session.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SummaryError::TooManyAnswers` if the outcome count cannot fit in `u32`.
    /// Returns `SummaryError::ScoreOverflow` if the awarded points exceed `max_score`.
    pub fn from_outcomes(
        key: PracticeKey,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        outcomes: &[QuestionOutcome],
        max_score: u32,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }

        let total_questions = u32::try_from(outcomes.len())
            .map_err(|_| SummaryError::TooManyAnswers { len: outcomes.len() })?;
        let mut correct = 0_u32;
        let mut score = 0_u32;
        for outcome in outcomes {
            if outcome.is_correct {
                correct = correct.saturating_add(1);
            }
            score = score.saturating_add(outcome.points_awarded);
        }

        if score > max_score {
            return Err(SummaryError::ScoreOverflow { score, max_score });
        }

        Ok(Self {
            key,
            started_at,
            completed_at,
            total_questions,
            correct,
            score,
            max_score,
        })
    }

    #[must_use]
    pub fn key(&self) -> &PracticeKey {
        &self.key
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Share of questions answered correctly, in `[0, 1]`.
    #[must_use]
    pub fn accuracy(&self) -> f32 {
        if self.total_questions == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.correct as f32 / self.total_questions as f32;
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExerciseType, Level};
    use crate::time::fixed_now;

    fn key() -> PracticeKey {
        PracticeKey::parse("Spanish", ExerciseType::VocabularyMatch, Level::A1).unwrap()
    }

    fn outcome(index: usize, is_correct: bool, points: u32) -> QuestionOutcome {
        QuestionOutcome {
            index,
            answer: format!("answer {index}"),
            is_correct,
            points_awarded: if is_correct { points } else { 0 },
        }
    }

    #[test]
    fn summary_counts_correct_answers() {
        let now = fixed_now();
        let outcomes = vec![outcome(0, true, 10), outcome(1, false, 10), outcome(2, true, 5)];

        let summary = PracticeSummary::from_outcomes(key(), now, now, &outcomes, 25).unwrap();

        assert_eq!(summary.total_questions(), 3);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.score(), 15);
        assert_eq!(summary.max_score(), 25);
        assert!((summary.accuracy() - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn summary_rejects_reversed_time_range() {
        let now = fixed_now();
        let err = PracticeSummary::from_outcomes(
            key(),
            now,
            now - chrono::Duration::seconds(1),
            &[],
            0,
        )
        .unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn summary_rejects_score_above_maximum() {
        let now = fixed_now();
        let err =
            PracticeSummary::from_outcomes(key(), now, now, &[outcome(0, true, 20)], 10).unwrap_err();
        assert_eq!(err, SummaryError::ScoreOverflow { score: 20, max_score: 10 });
    }
}
