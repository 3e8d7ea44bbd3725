use dioxus::prelude::*;

use lingo_core::model::{ExerciseType, Level};
use services::{PracticeController, PracticePhase};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::exercise::ExerciseCard;
use crate::vm::{LANGUAGES, PracticeIntent, SelectionVm, map_practice_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice_loop = ctx.practice_loop();
    let speech = ctx.speech();

    let selection = use_signal(|| SelectionVm::from_key(&ctx.initial_key()));
    let controller = {
        let practice_loop = practice_loop.clone();
        let initial_key = ctx.initial_key();
        use_signal(move || {
            let mut controller = practice_loop.controller();
            controller.select(initial_key);
            controller
        })
    };
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: PracticeIntent| {
        let mut selection = selection;
        let mut controller = controller;
        let mut error = error;

        match intent {
            PracticeIntent::SelectLanguage(_)
            | PracticeIntent::SelectKind(_)
            | PracticeIntent::SelectLevel(_) => {
                let next = selection.read().clone().apply(&intent);
                if let Ok(key) = next.to_key() {
                    controller.write().select(key);
                    error.set(None);
                }
                selection.set(next);
            }
            PracticeIntent::Start => {
                let Ok(key) = selection.read().to_key() else {
                    error.set(Some(ViewError::InvalidSelection));
                    return;
                };
                error.set(None);
                let ticket = controller.write().start(key);
                let practice_loop = practice_loop.clone();
                spawn(async move {
                    let result = practice_loop.fetch(&ticket).await;
                    controller.write().complete_load(ticket, result);
                });
            }
            PracticeIntent::PracticeMore => {
                let ticket = controller.write().practice_more();
                let Ok(ticket) = ticket else {
                    error.set(Some(ViewError::Unknown));
                    return;
                };
                let practice_loop = practice_loop.clone();
                spawn(async move {
                    let result = practice_loop.fetch(&ticket).await;
                    controller.write().complete_load(ticket, result);
                });
            }
            PracticeIntent::Answer(answer) => {
                let result = controller.write().submit_answer(&answer);
                error.set(result.err().map(|_| ViewError::Unknown));
            }
            PracticeIntent::Next => {
                let result = controller.write().advance();
                error.set(result.err().map(|_| ViewError::Unknown));
            }
            PracticeIntent::Reset => {
                controller.write().reset();
                error.set(None);
            }
            PracticeIntent::DismissNotice => controller.write().dismiss_notice(),
            PracticeIntent::Speak(text) => {
                let language = controller.read().key().map(|key| key.language.clone());
                if let Some(language) = language {
                    let speech = speech.clone();
                    spawn(async move {
                        speech.speak(&text, &language).await;
                    });
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch_intent, controller);
            }
        }
    }

    let on_answer = use_callback(move |answer: String| dispatch_intent.call(PracticeIntent::Answer(answer)));
    let on_speak = use_callback(move |text: String| dispatch_intent.call(PracticeIntent::Speak(text)));

    let guard = controller.read();
    let vm = map_practice_screen(&guard);
    let exercise = guard.current_exercise().cloned();
    let exercise_key = format!("{}:{}", guard.generation(), guard.current_index());
    drop(guard);

    let current = selection.read().clone();
    let busy = vm.is_loading();
    let answered = vm.is_answered();
    let error_message = (*error.read()).map(ViewError::message);

    rsx! {
        div { class: "page practice-page",
            header { class: "practice-header",
                h2 { class: "practice-title", "Practice" }
                if let Some(title) = vm.title.as_ref() {
                    p { class: "practice-subtitle", "{title}" }
                }
            }

            div { class: "practice-selector",
                label { class: "practice-field",
                    span { "Language" }
                    select {
                        disabled: busy,
                        value: "{current.language}",
                        onchange: move |evt| dispatch_intent.call(PracticeIntent::SelectLanguage(evt.value())),
                        for name in LANGUAGES {
                            option { value: "{name}", selected: current.language == name, "{name}" }
                        }
                    }
                }
                label { class: "practice-field",
                    span { "Exercise" }
                    select {
                        disabled: busy,
                        value: "{current.kind}",
                        onchange: move |evt| {
                            let kind = evt.value().parse::<ExerciseType>();
                            if let Ok(kind) = kind {
                                dispatch_intent.call(PracticeIntent::SelectKind(kind));
                            }
                        },
                        for kind in ExerciseType::KNOWN {
                            option {
                                value: "{kind}",
                                selected: current.kind == kind,
                                "{kind.label()}"
                            }
                        }
                    }
                }
                label { class: "practice-field",
                    span { "Level" }
                    select {
                        disabled: busy,
                        value: "{current.level}",
                        onchange: move |evt| {
                            if let Ok(level) = evt.value().parse::<Level>() {
                                dispatch_intent.call(PracticeIntent::SelectLevel(level));
                            }
                        },
                        for level in Level::ALL {
                            option { value: "{level}", selected: current.level == level, "{level}" }
                        }
                    }
                }
            }

            if let Some(message) = error_message {
                p { class: "practice-error", role: "alert", "{message}" }
            }

            if let Some(notice) = vm.notice.as_ref() {
                div { class: "practice-notice", role: "status",
                    p { "{notice.message}" }
                    if notice.retryable {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(PracticeIntent::Start),
                            "Retry"
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(PracticeIntent::DismissNotice),
                        "Dismiss"
                    }
                }
            }

            match vm.phase {
                PracticePhase::Idle => rsx! {
                    div { class: "practice-idle",
                        button {
                            class: "btn btn-primary",
                            id: "practice-start",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(PracticeIntent::Start),
                            "Start Practice"
                        }
                    }
                },
                PracticePhase::Loading => rsx! {
                    p { class: "practice-loading", "Loading exercises..." }
                },
                PracticePhase::Active => rsx! {
                    div { class: "practice-status",
                        if let Some(label) = vm.progress_label.as_ref() {
                            span { class: "practice-status__item", "{label}" }
                        }
                        span { class: "practice-status__item", "{vm.score_label}" }
                        div { class: "progress-bar",
                            div { class: "progress-bar__fill", style: "width: {vm.progress_percent}%" }
                        }
                    }
                    if let Some(exercise) = exercise {
                        ExerciseCard {
                            key: "{exercise_key}",
                            exercise,
                            answered,
                            on_answer,
                            on_speak,
                        }
                    }
                    if !vm.hints.is_empty() {
                        details { class: "practice-hints",
                            summary { "Hints" }
                            ul {
                                for hint in vm.hints.iter() {
                                    li { "{hint}" }
                                }
                            }
                        }
                    }
                    if let Some(feedback) = vm.feedback.as_ref() {
                        div {
                            class: if feedback.is_correct { "feedback feedback--correct" } else { "feedback feedback--incorrect" },
                            role: "status",
                            p { class: "feedback__title", "{feedback.title}" }
                            if let Some(explanation) = feedback.explanation.as_ref() {
                                p { class: "feedback__explanation", "{explanation}" }
                            }
                            button {
                                class: "btn btn-primary",
                                id: "practice-next",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(PracticeIntent::Next),
                                "{vm.next_label}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost practice-quit",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(PracticeIntent::Reset),
                        "Quit"
                    }
                },
                PracticePhase::Completed => rsx! {
                    div { class: "practice-complete",
                        h3 { class: "practice-complete__title", "Practice complete" }
                        if let Some(summary) = vm.summary.as_ref() {
                            ul { class: "practice-complete__stats",
                                li { "{summary.score_label}" }
                                li { "{summary.correct_label}" }
                                li { "Accuracy: {summary.accuracy_label}" }
                                li { "Time: {summary.duration_label}" }
                            }
                        }
                        div { class: "practice-complete__actions",
                            button {
                                class: "btn btn-primary",
                                id: "practice-more",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(PracticeIntent::PracticeMore),
                                "Practice More"
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(PracticeIntent::Reset),
                                "Change Exercise"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    controller: Rc<RefCell<Option<Signal<PracticeController>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PracticeIntent>,
        controller: Signal<PracticeController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<PracticeController> {
        (*self.controller.borrow()).expect("practice controller registered")
    }
}
