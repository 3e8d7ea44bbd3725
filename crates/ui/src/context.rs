use std::sync::Arc;

use lingo_core::model::PracticeKey;
use services::{PracticeLoopService, SpeechService};

pub trait UiApp: Send + Sync {
    /// Selection shown when the practice screen first opens.
    fn initial_key(&self) -> PracticeKey;

    fn practice_loop(&self) -> Arc<PracticeLoopService>;
    fn speech(&self) -> SpeechService;
}

#[derive(Clone)]
pub struct AppContext {
    initial_key: PracticeKey,
    practice_loop: Arc<PracticeLoopService>,
    speech: SpeechService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_key: app.initial_key(),
            practice_loop: app.practice_loop(),
            speech: app.speech(),
        }
    }

    #[must_use]
    pub fn initial_key(&self) -> PracticeKey {
        self.initial_key.clone()
    }

    #[must_use]
    pub fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }

    #[must_use]
    pub fn speech(&self) -> SpeechService {
        self.speech.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
