use dioxus::prelude::*;

use lingo_core::model::{Exercise, ExerciseType};

use crate::vm::{
    ExerciseRenderer, LetterBoard, MatchBoard, SentenceBoard, TileState, instructions_for,
};

/// One exercise: instructions, question, and the renderer for its type.
///
/// Mount with a `key` per question so board state starts fresh.
#[component]
pub fn ExerciseCard(
    exercise: Exercise,
    answered: bool,
    on_answer: EventHandler<String>,
    on_speak: EventHandler<String>,
) -> Element {
    let renderer = ExerciseRenderer::for_exercise(&exercise);
    let question = exercise.question().to_string();
    let context = exercise.context().map(str::to_string);
    let kind = exercise.kind().clone();

    rsx! {
        div { class: "exercise",
            HowToPlay { kind: kind.clone() }
            h3 { class: "exercise-question", "{question}" }
            if let Some(context) = context {
                p { class: "exercise-context", "{context}" }
            }
            match renderer {
                ExerciseRenderer::VocabularyMatch(board) => rsx! {
                    MatchGame { board, answered, on_answer, on_speak }
                },
                ExerciseRenderer::SentenceBuilder(board) => rsx! {
                    SentenceGame { board, answered, on_answer, on_speak }
                },
                ExerciseRenderer::WordPuzzle(board) => rsx! {
                    LetterGame { board, answered, on_answer, on_speak }
                },
                ExerciseRenderer::Unsupported { kind } => rsx! {
                    UnsupportedExercise { kind, answered, on_answer }
                },
            }
        }
    }
}

#[component]
fn HowToPlay(kind: ExerciseType) -> Element {
    let text = instructions_for(&kind);
    rsx! {
        div { class: "how-to-play",
            h4 { class: "how-to-play__title", "How to Play" }
            p { class: "how-to-play__text", "{text}" }
        }
    }
}

#[component]
fn SpeakButton(text: String, on_speak: EventHandler<String>) -> Element {
    let label = format!("Listen to {text}");
    rsx! {
        button {
            class: "speak-btn",
            r#type: "button",
            title: "Listen to pronunciation",
            aria_label: "{label}",
            onclick: move |evt| {
                evt.stop_propagation();
                on_speak.call(text.clone());
            },
            "🔊"
        }
    }
}

//
// ─── VOCABULARY MATCH ──────────────────────────────────────────────────────────
//

#[component]
fn MatchGame(
    board: MatchBoard,
    answered: bool,
    on_answer: EventHandler<String>,
    on_speak: EventHandler<String>,
) -> Element {
    let board = use_signal(|| board.clone());
    let on_pick = use_callback(move |option: String| {
        let mut board = board;
        let attempt = board.write().pick(&option);
        if let Some(attempt) = attempt {
            on_answer.call(attempt.answer);
        }
    });

    let current = board.read().clone();
    let words = current
        .words()
        .iter()
        .map(|word| (word.clone(), current.tile_state(word)))
        .collect::<Vec<_>>();
    let translations = current
        .translations()
        .iter()
        .map(|word| (word.clone(), current.tile_state(word)))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "match-board",
            div { class: "match-column match-column--words",
                for (index, (word, state)) in words.into_iter().enumerate() {
                    MatchTile {
                        key: "w{index}",
                        label: word,
                        state,
                        disabled: answered,
                        speakable: true,
                        on_pick,
                        on_speak,
                    }
                }
            }
            div { class: "match-column match-column--translations",
                for (index, (word, state)) in translations.into_iter().enumerate() {
                    MatchTile {
                        key: "t{index}",
                        label: word,
                        state,
                        disabled: answered,
                        speakable: false,
                        on_pick,
                        on_speak,
                    }
                }
            }
        }
    }
}

#[component]
fn MatchTile(
    label: String,
    state: TileState,
    disabled: bool,
    speakable: bool,
    on_pick: Callback<String>,
    on_speak: EventHandler<String>,
) -> Element {
    let picked = label.clone();
    rsx! {
        div { class: "match-tile {state.class()}",
            button {
                class: "match-tile__pick",
                r#type: "button",
                disabled: disabled || state == TileState::Matched,
                onclick: move |_| on_pick.call(picked.clone()),
                "{label}"
            }
            if speakable {
                SpeakButton { text: label.clone(), on_speak }
            }
        }
    }
}

//
// ─── SENTENCE BUILDER ──────────────────────────────────────────────────────────
//

#[component]
fn SentenceGame(
    board: SentenceBoard,
    answered: bool,
    on_answer: EventHandler<String>,
    on_speak: EventHandler<String>,
) -> Element {
    let mut board = use_signal(|| board.clone());
    let current = board.read().clone();
    let sentence = current.sentence();
    let can_submit = current.can_submit() && !answered;
    let picked = current.picked().to_vec();
    let remaining = current.remaining().to_vec();

    rsx! {
        div { class: "sentence-board",
            div { class: "sentence-slot",
                for (index, word) in picked.into_iter().enumerate() {
                    button {
                        key: "p{index}",
                        class: "sentence-word sentence-word--picked",
                        r#type: "button",
                        disabled: answered,
                        title: "Remove",
                        onclick: move |_| {
                            board.write().remove(index);
                        },
                        "{word}"
                    }
                }
                if !sentence.is_empty() {
                    SpeakButton { text: sentence.clone(), on_speak }
                }
            }
            div { class: "sentence-pool",
                for (index, word) in remaining.into_iter().enumerate() {
                    div { key: "r{index}", class: "sentence-option",
                        button {
                            class: "sentence-word",
                            r#type: "button",
                            disabled: answered,
                            onclick: move |_| {
                                board.write().pick(index);
                            },
                            "{word}"
                        }
                        SpeakButton { text: word.clone(), on_speak }
                    }
                }
            }
            div { class: "sentence-actions",
                button {
                    class: "btn btn-primary",
                    id: "sentence-submit",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: move |_| {
                        let attempt = board.read().submit();
                        if let Some(attempt) = attempt {
                            on_answer.call(attempt.answer);
                        }
                    },
                    "Check Answer"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: answered,
                    onclick: move |_| board.write().reset(),
                    "Reset"
                }
            }
        }
    }
}

//
// ─── WORD PUZZLE ───────────────────────────────────────────────────────────────
//

#[component]
fn LetterGame(
    board: LetterBoard,
    answered: bool,
    on_answer: EventHandler<String>,
    on_speak: EventHandler<String>,
) -> Element {
    let board = use_signal(|| board.clone());
    let letters = board.read().letters().to_vec();

    rsx! {
        div { class: "letter-board",
            for (index, letter) in letters.into_iter().enumerate() {
                div { key: "{index}", class: "letter-option",
                    button {
                        class: "letter-tile",
                        r#type: "button",
                        disabled: answered,
                        onclick: move |_| {
                            let attempt = board.read().choose(index);
                            if let Some(attempt) = attempt {
                                on_answer.call(attempt.answer);
                            }
                        },
                        "{letter}"
                    }
                    SpeakButton { text: letter.clone(), on_speak }
                }
            }
        }
    }
}

/// No interactive board for this kind; skipping submits an empty answer so
/// the question is scored incorrect and the set can still be finished.
#[component]
fn UnsupportedExercise(kind: ExerciseType, answered: bool, on_answer: EventHandler<String>) -> Element {
    let label = kind.label();
    rsx! {
        div { class: "exercise-unsupported",
            p { "{label} exercises are not implemented yet." }
            button {
                class: "btn btn-secondary",
                id: "exercise-skip",
                r#type: "button",
                disabled: answered,
                onclick: move |_| on_answer.call(String::new()),
                "Skip"
            }
        }
    }
}
