use lingo_core::model::{ExerciseType, Level, PracticeKey, PracticeKeyError};
use services::{PracticeController, PracticePhase};

use crate::vm::time_fmt::format_duration;

/// Languages offered in the selector, in menu order.
pub const LANGUAGES: [&str; 8] = [
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Japanese",
    "Chinese",
    "English",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    SelectLanguage(String),
    SelectKind(ExerciseType),
    SelectLevel(Level),
    Start,
    Answer(String),
    Next,
    PracticeMore,
    Reset,
    DismissNotice,
    Speak(String),
}

/// The selector's current values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionVm {
    pub language: String,
    pub kind: ExerciseType,
    pub level: Level,
}

impl SelectionVm {
    #[must_use]
    pub fn from_key(key: &PracticeKey) -> Self {
        Self {
            language: key.language.name().to_owned(),
            kind: key.kind.clone(),
            level: key.level,
        }
    }

    /// # Errors
    ///
    /// Returns `PracticeKeyError::EmptyLanguage` when no language is chosen.
    pub fn to_key(&self) -> Result<PracticeKey, PracticeKeyError> {
        PracticeKey::parse(&self.language, self.kind.clone(), self.level)
    }

    /// Apply a selector intent; other intents leave the selection alone.
    #[must_use]
    pub fn apply(mut self, intent: &PracticeIntent) -> Self {
        match intent {
            PracticeIntent::SelectLanguage(language) => self.language.clone_from(language),
            PracticeIntent::SelectKind(kind) => self.kind = kind.clone(),
            PracticeIntent::SelectLevel(level) => self.level = *level,
            _ => {}
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub title: String,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub message: String,
    pub retryable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_label: String,
    pub correct_label: String,
    pub accuracy_label: String,
    pub duration_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeScreenVm {
    pub phase: PracticePhase,
    pub title: Option<String>,
    pub progress_label: Option<String>,
    pub progress_percent: u32,
    pub score_label: String,
    pub feedback: Option<FeedbackVm>,
    pub hints: Vec<String>,
    pub next_label: &'static str,
    pub notice: Option<NoticeVm>,
    pub summary: Option<SummaryVm>,
}

impl PracticeScreenVm {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == PracticePhase::Loading
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }
}

#[must_use]
pub fn map_practice_screen(controller: &PracticeController) -> PracticeScreenVm {
    let title = controller
        .key()
        .map(|key| format!("{} · {} · {}", key.kind.label(), key.language, key.level));

    let progress = controller.progress();
    let progress_label = progress
        .filter(|_| controller.phase() == PracticePhase::Active)
        .map(|p| format!("Question {} of {}", p.position, p.total));
    let progress_percent = progress.map_or(0, |p| {
        let total = u32::try_from(p.total).unwrap_or(u32::MAX).max(1);
        let answered = u32::try_from(p.answered).unwrap_or(u32::MAX);
        answered.saturating_mul(100) / total
    });
    let score_label = match progress {
        Some(p) => format!("Score: {} / {}", p.score, p.max_score),
        None => "Score: 0".to_string(),
    };

    let session = controller.session().filter(|_| controller.phase() == PracticePhase::Active);
    let feedback = session.and_then(|session| {
        let feedback = session.feedback()?;
        let title = if feedback.is_correct {
            format!("Correct! +{} points", feedback.points)
        } else {
            "Not quite. Keep practicing!".to_string()
        };
        let explanation = session
            .explanation()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_owned);
        Some(FeedbackVm {
            is_correct: feedback.is_correct,
            title,
            explanation,
        })
    });
    let next_label = match progress {
        Some(p) if p.position >= p.total => "Finish",
        _ => "Next Question",
    };

    let notice = controller.notice().map(|notice| NoticeVm {
        message: notice.message(),
        retryable: notice.is_retryable(),
    });

    let summary = controller.summary().map(|summary| SummaryVm {
        score_label: format!("{} / {} points", summary.score(), summary.max_score()),
        correct_label: format!(
            "{} of {} correct",
            summary.correct(),
            summary.total_questions()
        ),
        accuracy_label: format!("{:.0}%", summary.accuracy() * 100.0),
        duration_label: format_duration(summary.duration()),
    });

    PracticeScreenVm {
        phase: controller.phase(),
        title,
        progress_label,
        progress_percent,
        score_label,
        feedback,
        hints: controller.current_hints().to_vec(),
        next_label,
        notice,
        summary,
    }
}
