use std::fmt;

use lingo_core::Clock;
use lingo_core::model::{Exercise, PracticeKey, PracticeSet, PracticeSummary};

use crate::error::{PracticeError, SourceError};
use super::progress::PracticeProgress;
use super::session::{Advance, Feedback, PracticeSession};

/// Coarse controller state, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticePhase {
    Idle,
    Loading,
    Active,
    Completed,
}

/// Dismissible message left behind by a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeNotice {
    /// Network, server, or payload failure. Start again to retry.
    SourceUnavailable { key: PracticeKey, reason: String },
    /// Neither the source nor the fallback table had exercises.
    NotAvailable { key: PracticeKey },
}

impl PracticeNotice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            PracticeNotice::SourceUnavailable { .. } => {
                "Could not load exercises. Check your connection and try again.".to_string()
            }
            PracticeNotice::NotAvailable { key } => format!(
                "{} exercises are not available for {} at level {} yet.",
                key.kind.label(),
                key.language,
                key.level
            ),
        }
    }

    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, PracticeNotice::SourceUnavailable { .. })
    }
}

/// Handle for one in-flight load.
///
/// Carries the controller generation at the time the load began; results
/// presented with an older ticket are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    key: PracticeKey,
}

impl LoadTicket {
    #[must_use]
    pub fn key(&self) -> &PracticeKey {
        &self.key
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened when a load result was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Active,
    NotAvailable,
    Unavailable,
    /// The ticket was stale; the controller was left untouched.
    Discarded,
}

enum State {
    Idle,
    Loading,
    Active(PracticeSession),
    Completed {
        session: PracticeSession,
        summary: PracticeSummary,
    },
}

/// Client-held state machine driving one practice selection.
///
/// `Idle → Loading → Active → Completed`, with `reset` and selection changes
/// returning to `Idle` from anywhere.
pub struct PracticeController {
    clock: Clock,
    state: State,
    key: Option<PracticeKey>,
    generation: u64,
    notice: Option<PracticeNotice>,
}

impl PracticeController {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: State::Idle,
            key: None,
            generation: 0,
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> PracticePhase {
        match self.state {
            State::Idle => PracticePhase::Idle,
            State::Loading => PracticePhase::Loading,
            State::Active(_) => PracticePhase::Active,
            State::Completed { .. } => PracticePhase::Completed,
        }
    }

    /// Bumped whenever the selection changes or a load starts.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current `{language, type, level}` selection.
    #[must_use]
    pub fn key(&self) -> Option<&PracticeKey> {
        self.key.as_ref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&PracticeNotice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn session(&self) -> Option<&PracticeSession> {
        match &self.state {
            State::Active(session) | State::Completed { session, .. } => Some(session),
            State::Idle | State::Loading => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&PracticeSummary> {
        match &self.state {
            State::Completed { summary, .. } => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.session().and_then(PracticeSession::current_exercise)
    }

    #[must_use]
    pub fn current_hints(&self) -> &[String] {
        self.current_exercise().map_or(&[], Exercise::hints)
    }

    /// Current question index, `0` when no set is loaded.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session().map_or(0, PracticeSession::current_index)
    }

    /// Current score, `0` when no set is loaded.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.session().map_or(0, PracticeSession::score)
    }

    #[must_use]
    pub fn progress(&self) -> Option<PracticeProgress> {
        self.session().map(PracticeSession::progress)
    }

    /// Change the selection. A different key discards any set in progress or
    /// in flight and returns to `Idle`; the same key is a no-op.
    pub fn select(&mut self, key: PracticeKey) {
        if self.key.as_ref() == Some(&key) {
            return;
        }
        tracing::debug!(%key, "practice selection changed");
        self.discard();
        self.key = Some(key);
    }

    /// Begin loading `key`, discarding whatever was there.
    pub fn start(&mut self, key: PracticeKey) -> LoadTicket {
        self.discard();
        self.key = Some(key.clone());
        self.state = State::Loading;
        tracing::info!(%key, generation = self.generation, "loading practice set");
        LoadTicket {
            generation: self.generation,
            key,
        }
    }

    /// Load a fresh set for the same selection after finishing one.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotCompleted` unless the current set is completed.
    pub fn practice_more(&mut self) -> Result<LoadTicket, PracticeError> {
        let State::Completed { session, .. } = &self.state else {
            return Err(PracticeError::NotCompleted);
        };
        let key = session.key().clone();
        Ok(self.start(key))
    }

    /// Abandon the set and return to `Idle`. The selection is kept.
    pub fn reset(&mut self) {
        self.discard();
    }

    fn discard(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = State::Idle;
        self.notice = None;
    }

    /// Apply the result of a load started with `ticket`.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PracticeSet, SourceError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation || !matches!(self.state, State::Loading) {
            tracing::debug!(
                key = %ticket.key,
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale practice set"
            );
            return LoadOutcome::Discarded;
        }

        let LoadTicket { key, .. } = ticket;
        match result {
            Ok(set) => match PracticeSession::new(key.clone(), set, self.clock.now()) {
                Ok(session) => {
                    tracing::info!(%key, exercises = session.set().len(), "practice set started");
                    self.state = State::Active(session);
                    LoadOutcome::Active
                }
                Err(_) => self.not_available(key),
            },
            Err(SourceError::EmptyResult) => self.not_available(key),
            Err(err) => {
                tracing::warn!(%key, error = %err, "practice set failed to load");
                self.state = State::Idle;
                self.notice = Some(PracticeNotice::SourceUnavailable {
                    key,
                    reason: err.to_string(),
                });
                LoadOutcome::Unavailable
            }
        }
    }

    fn not_available(&mut self, key: PracticeKey) -> LoadOutcome {
        tracing::info!(%key, "no exercises available");
        self.state = State::Idle;
        self.notice = Some(PracticeNotice::NotAvailable { key });
        LoadOutcome::NotAvailable
    }

    /// Check an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotActive` outside `Active`, and session errors
    /// such as `AlreadyAnswered` otherwise.
    pub fn submit_answer(&mut self, raw_answer: &str) -> Result<Feedback, PracticeError> {
        match &mut self.state {
            State::Active(session) => session.submit_answer(raw_answer),
            State::Completed { .. } => Err(PracticeError::Completed),
            State::Idle | State::Loading => Err(PracticeError::NotActive),
        }
    }

    /// Move to the next question, or to `Completed` after the last one.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotActive` outside `Active`, and
    /// `PracticeError::FeedbackPending` before the question is answered.
    pub fn advance(&mut self) -> Result<PracticePhase, PracticeError> {
        let now = self.clock.now();
        let advance = match &mut self.state {
            State::Active(session) => session.advance(now)?,
            State::Completed { .. } => return Err(PracticeError::Completed),
            State::Idle | State::Loading => return Err(PracticeError::NotActive),
        };

        if let Advance::Next { .. } = advance {
            return Ok(PracticePhase::Active);
        }

        let State::Active(session) = std::mem::replace(&mut self.state, State::Idle) else {
            return Err(PracticeError::NotActive);
        };
        match session.summary() {
            Ok(summary) => {
                tracing::info!(
                    key = %summary.key(),
                    score = summary.score(),
                    max_score = summary.max_score(),
                    correct = summary.correct(),
                    "practice set completed"
                );
                self.state = State::Completed { session, summary };
                Ok(PracticePhase::Completed)
            }
            Err(err) => {
                tracing::warn!(error = %err, key = %session.key(), "practice summary failed");
                self.discard();
                Err(err)
            }
        }
    }
}

impl fmt::Debug for PracticeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeController")
            .field("phase", &self.phase())
            .field("key", &self.key)
            .field("generation", &self.generation)
            .field("notice", &self.notice)
            .field("session", &self.session())
            .finish()
    }
}
