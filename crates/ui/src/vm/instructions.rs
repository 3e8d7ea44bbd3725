use lingo_core::model::ExerciseType;

const DEFAULT_INSTRUCTIONS: &str = "Follow the prompt and choose your answer.";

/// "How to play" text shown above each exercise.
#[must_use]
pub fn instructions_for(kind: &ExerciseType) -> &'static str {
    match kind {
        ExerciseType::VocabularyMatch => {
            "Click a word, then click its translation. Use the speaker to hear the word."
        }
        ExerciseType::SentenceBuilder => {
            "Click the words in order to build the sentence. Click a placed word to remove it, then check your answer."
        }
        ExerciseType::WordPuzzle => "Pick the option that completes the puzzle.",
        ExerciseType::ListeningChallenge => "Listen carefully and choose what you heard.",
        ExerciseType::PronunciationGame => "Listen to the word and repeat it aloud.",
        ExerciseType::ConversationSim => "Choose the best reply to continue the conversation.",
        ExerciseType::MemoryCards => "Flip the cards and find the matching pairs.",
        ExerciseType::FillBlanks => "Fill in the missing word.",
        ExerciseType::Unrecognized(_) => DEFAULT_INSTRUCTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_get_default_text() {
        let kind = ExerciseType::Unrecognized("spelling-bee".into());
        assert_eq!(instructions_for(&kind), DEFAULT_INSTRUCTIONS);
        assert_ne!(instructions_for(&ExerciseType::WordPuzzle), DEFAULT_INSTRUCTIONS);
    }
}
