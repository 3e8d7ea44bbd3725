use lingo_core::answer::answers_match;
use lingo_core::model::{Exercise, ExerciseType};

/// One answer collected by a renderer, with the answer it is judged against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerAttempt {
    pub answer: String,
    pub correct_answer: String,
}

impl AnswerAttempt {
    fn new(answer: String, correct_answer: &str) -> Self {
        Self {
            answer,
            correct_answer: correct_answer.to_owned(),
        }
    }
}

/// Answer-collection state for one exercise, picked by exercise type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseRenderer {
    VocabularyMatch(MatchBoard),
    SentenceBuilder(SentenceBoard),
    WordPuzzle(LetterBoard),
    /// No interactive variant exists for this type; a placeholder is shown.
    Unsupported { kind: ExerciseType },
}

impl ExerciseRenderer {
    #[must_use]
    pub fn for_exercise(exercise: &Exercise) -> Self {
        match exercise.kind() {
            ExerciseType::VocabularyMatch => Self::VocabularyMatch(MatchBoard::new(exercise)),
            ExerciseType::SentenceBuilder => Self::SentenceBuilder(SentenceBoard::new(exercise)),
            ExerciseType::WordPuzzle => Self::WordPuzzle(LetterBoard::new(exercise)),
            other => Self::Unsupported { kind: other.clone() },
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

//
// ─── VOCABULARY MATCH ──────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Idle,
    Selected,
    Matched,
}

impl TileState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            TileState::Idle => "match-tile--idle",
            TileState::Selected => "match-tile--selected",
            TileState::Matched => "match-tile--matched",
        }
    }
}

/// Two columns: the first half of the options are words, the second half
/// their translations. Clicking two tiles reports `"first - second"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchBoard {
    words: Vec<String>,
    translations: Vec<String>,
    selected: Option<String>,
    matched: Vec<String>,
    correct_answer: String,
}

impl MatchBoard {
    #[must_use]
    pub fn new(exercise: &Exercise) -> Self {
        let options = exercise.options();
        let half = options.len() / 2;
        Self {
            words: options[..half].to_vec(),
            translations: options[half..].to_vec(),
            selected: None,
            matched: Vec::new(),
            correct_answer: exercise.correct_answer().to_owned(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn translations(&self) -> &[String] {
        &self.translations
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_matched(&self, option: &str) -> bool {
        self.matched.iter().any(|matched| matched == option)
    }

    #[must_use]
    pub fn tile_state(&self, option: &str) -> TileState {
        if self.is_matched(option) {
            TileState::Matched
        } else if self.selected() == Some(option) {
            TileState::Selected
        } else {
            TileState::Idle
        }
    }

    /// Click a tile.
    ///
    /// The first click selects, clicking the selected tile again clears the
    /// selection, and a second different tile reports the pair. Matched
    /// tiles ignore clicks.
    ///
    /// A pair that matches in either click order is reported in the order of
    /// the correct answer, so the tiles turning green and the scored answer
    /// always agree. Any other pair is reported in click order.
    pub fn pick(&mut self, option: &str) -> Option<AnswerAttempt> {
        if self.is_matched(option) {
            return None;
        }
        let Some(first) = self.selected.take() else {
            self.selected = Some(option.to_owned());
            return None;
        };
        if first == option {
            return None;
        }

        let pair = format!("{first} - {option}");
        let reverse = format!("{option} - {first}");
        let answer = if answers_match(&pair, &self.correct_answer) {
            pair
        } else if answers_match(&reverse, &self.correct_answer) {
            reverse
        } else {
            return Some(AnswerAttempt::new(pair, &self.correct_answer));
        };
        self.matched.push(first);
        self.matched.push(option.to_owned());
        Some(AnswerAttempt::new(answer, &self.correct_answer))
    }
}

//
// ─── SENTENCE BUILDER ──────────────────────────────────────────────────────────
//

/// Words are moved from the pool into the sentence in click order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceBoard {
    options: Vec<String>,
    picked: Vec<String>,
    remaining: Vec<String>,
    correct_answer: String,
}

impl SentenceBoard {
    #[must_use]
    pub fn new(exercise: &Exercise) -> Self {
        Self {
            options: exercise.options().to_vec(),
            picked: Vec::new(),
            remaining: exercise.options().to_vec(),
            correct_answer: exercise.correct_answer().to_owned(),
        }
    }

    #[must_use]
    pub fn picked(&self) -> &[String] {
        &self.picked
    }

    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Move `remaining[index]` to the end of the sentence.
    pub fn pick(&mut self, index: usize) -> bool {
        if index >= self.remaining.len() {
            return false;
        }
        let word = self.remaining.remove(index);
        self.picked.push(word);
        true
    }

    /// Return `picked[index]` to the end of the pool.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.picked.len() {
            return false;
        }
        let word = self.picked.remove(index);
        self.remaining.push(word);
        true
    }

    pub fn reset(&mut self) {
        self.picked.clear();
        self.remaining.clone_from(&self.options);
    }

    #[must_use]
    pub fn sentence(&self) -> String {
        self.picked.join(" ").trim().to_owned()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.picked.is_empty()
    }

    /// `None` while the sentence is empty.
    #[must_use]
    pub fn submit(&self) -> Option<AnswerAttempt> {
        self.can_submit()
            .then(|| AnswerAttempt::new(self.sentence(), &self.correct_answer))
    }
}

//
// ─── WORD PUZZLE ───────────────────────────────────────────────────────────────
//

/// Single choice: clicking an option reports it at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterBoard {
    letters: Vec<String>,
    correct_answer: String,
}

impl LetterBoard {
    #[must_use]
    pub fn new(exercise: &Exercise) -> Self {
        Self {
            letters: exercise.options().to_vec(),
            correct_answer: exercise.correct_answer().to_owned(),
        }
    }

    #[must_use]
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    #[must_use]
    pub fn choose(&self, index: usize) -> Option<AnswerAttempt> {
        self.letters
            .get(index)
            .map(|letter| AnswerAttempt::new(letter.clone(), &self.correct_answer))
    }
}
