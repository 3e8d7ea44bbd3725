use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lingo_core::model::{PracticeKey, PracticeSet};
use lingo_core::time::fixed_now;
use services::{
    Clock, ExerciseSource, FallbackExerciseSource, PracticeLoopService, SourceError,
    SpeechService,
};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::PracticeView;
use crate::views::practice::PracticeTestHandles;

/// Remote source with nothing to offer; the builtin fallback table answers.
pub struct EmptyRemote;

#[async_trait]
impl ExerciseSource for EmptyRemote {
    async fn fetch(&self, _key: &PracticeKey) -> Result<PracticeSet, SourceError> {
        Err(SourceError::EmptyResult)
    }
}

#[derive(Clone)]
struct TestApp {
    initial_key: PracticeKey,
    practice_loop: Arc<PracticeLoopService>,
    speech: SpeechService,
}

impl UiApp for TestApp {
    fn initial_key(&self) -> PracticeKey {
        self.initial_key.clone()
    }

    fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }

    fn speech(&self) -> SpeechService {
        self.speech.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: PracticeTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn PracticeHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { PracticeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: PracticeTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_practice_harness(initial_key: PracticeKey) -> ViewHarness {
    setup_practice_harness_with_source(initial_key, Arc::new(EmptyRemote))
}

pub fn setup_practice_harness_with_source(
    initial_key: PracticeKey,
    remote: Arc<dyn ExerciseSource>,
) -> ViewHarness {
    build_harness(initial_key, remote, SpeechService::silent())
}

pub fn setup_practice_harness_with_speech(
    initial_key: PracticeKey,
    speech: SpeechService,
) -> ViewHarness {
    build_harness(initial_key, Arc::new(EmptyRemote), speech)
}

fn build_harness(
    initial_key: PracticeKey,
    remote: Arc<dyn ExerciseSource>,
    speech: SpeechService,
) -> ViewHarness {
    let storage = Storage::builtin().expect("builtin fallback table");
    let source = FallbackExerciseSource::new(remote, Arc::clone(&storage.fallback));
    let practice_loop = Arc::new(PracticeLoopService::new(
        Clock::fixed(fixed_now()),
        Arc::new(source),
    ));
    let handles = PracticeTestHandles::default();

    let app = Arc::new(TestApp {
        initial_key,
        practice_loop,
        speech,
    });
    let dom = VirtualDom::new_with_props(
        PracticeHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
