use lingo_core::model::{ExerciseType, Level, PracticeKey};
use storage::{Storage, StorageError, load_entries};

fn key(language: &str, kind: ExerciseType, level: Level) -> PracticeKey {
    PracticeKey::parse(language, kind, level).unwrap()
}

#[tokio::test]
async fn builtin_storage_serves_known_keys_only() {
    let storage = Storage::builtin().expect("builtin storage");

    let spanish = storage
        .fallback
        .lookup(&key("spanish", ExerciseType::VocabularyMatch, Level::A1))
        .await
        .unwrap()
        .expect("spanish vocabulary fallback");
    assert_eq!(spanish.len(), 1);

    let english = storage
        .fallback
        .lookup(&key("English", ExerciseType::SentenceBuilder, Level::B2))
        .await
        .unwrap();
    assert!(english.is_some());

    let french_puzzle = storage
        .fallback
        .lookup(&key("French", ExerciseType::WordPuzzle, Level::C2))
        .await
        .unwrap();
    assert!(french_puzzle.is_none());
}

#[tokio::test]
async fn extra_entries_from_file_override_builtin() {
    let path = std::env::temp_dir().join(format!(
        "lingo-fallback-{}.json",
        std::process::id()
    ));
    let json = r#"[
        {
            "language": "Spanish",
            "type": "vocabulary-match",
            "level": "A1",
            "exercises": [],
            "vocabulary": []
        },
        {
            "language": "French",
            "type": "word-puzzle",
            "level": "C2",
            "exercises": [
                {"type": "word-puzzle", "question": "Pick the silent letter in 'temps'", "options": ["t", "p"], "correct_answer": "p", "difficulty": "C2"}
            ]
        }
    ]"#;
    tokio::fs::write(&path, json).await.unwrap();

    let entries = load_entries(&path).expect("load entries");
    tokio::fs::remove_file(&path).await.unwrap();
    assert_eq!(entries.len(), 2);

    let storage = Storage::builtin_with(entries).expect("storage");

    let spanish = storage
        .fallback
        .lookup(&key("Spanish", ExerciseType::VocabularyMatch, Level::A1))
        .await
        .unwrap()
        .expect("entry present");
    assert!(spanish.is_empty());

    let french = storage
        .fallback
        .lookup(&key("French", ExerciseType::WordPuzzle, Level::C2))
        .await
        .unwrap()
        .expect("entry present");
    assert_eq!(french.exercises()[0].correct_answer(), "p");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("lingo-fallback-does-not-exist.json");
    let err = load_entries(&path).unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
}
