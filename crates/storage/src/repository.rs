use async_trait::async_trait;
use lingo_core::model::{ExerciseError, PracticeKey, PracticeSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::builtin;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid fallback entry: {0}")]
    InvalidEntry(#[from] ExerciseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// One row of the fallback table: the key and the set served for it.
///
/// The JSON shape flattens both, e.g.
/// `{"language": "German", "type": "word-puzzle", "level": "A1", "exercises": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEntry {
    #[serde(flatten)]
    pub key: PracticeKey,
    #[serde(flatten)]
    pub set: PracticeSet,
}

/// Repository contract for the local fallback exercise table.
#[async_trait]
pub trait FallbackRepository: Send + Sync {
    /// Find the fallback set for a `(language, level, type)` key.
    ///
    /// Returns `Ok(None)` when no entry exists. An entry may hold an empty set;
    /// callers decide how to treat it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be read.
    async fn lookup(&self, key: &PracticeKey) -> Result<Option<PracticeSet>, StorageError>;

    /// Insert or replace the set stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be written.
    async fn upsert(&self, key: PracticeKey, set: PracticeSet) -> Result<(), StorageError>;
}

/// Fallback table held in memory.
#[derive(Clone, Default)]
pub struct InMemoryFallbackTable {
    entries: Arc<Mutex<HashMap<PracticeKey, PracticeSet>>>,
}

impl InMemoryFallbackTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Build a table from a list of entries; later entries win on duplicate keys.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = FallbackEntry>) -> Self {
        let map = entries
            .into_iter()
            .map(|entry| (entry.key, entry.set))
            .collect::<HashMap<_, _>>();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    /// Merge entries into the table, replacing existing keys.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the table lock is poisoned.
    pub fn extend(&self, entries: impl IntoIterator<Item = FallbackEntry>) -> Result<usize, StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut count = 0_usize;
        for entry in entries {
            guard.insert(entry.key, entry.set);
            count += 1;
        }
        Ok(count)
    }

    /// Number of keys in the table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the table lock is poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.len())
    }
}

#[async_trait]
impl FallbackRepository for InMemoryFallbackTable {
    async fn lookup(&self, key: &PracticeKey) -> Result<Option<PracticeSet>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn upsert(&self, key: PracticeKey, set: PracticeSet) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, set);
        Ok(())
    }
}

/// Parse fallback entries from a JSON array.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or invalid exercises.
pub fn parse_entries(json: &str) -> Result<Vec<FallbackEntry>, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Read fallback entries from a JSON file on disk.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, or
/// `StorageError::Serialization` if its contents are invalid.
pub fn load_entries(path: &Path) -> Result<Vec<FallbackEntry>, StorageError> {
    let raw = std::fs::read_to_string(path)?;
    let entries = parse_entries(&raw)?;
    tracing::info!(path = %path.display(), count = entries.len(), "loaded fallback entries");
    Ok(entries)
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub fallback: Arc<dyn FallbackRepository>,
}

impl Storage {
    /// Storage with an empty fallback table.
    #[must_use]
    pub fn in_memory() -> Self {
        let fallback: Arc<dyn FallbackRepository> = Arc::new(InMemoryFallbackTable::new());
        Self { fallback }
    }

    /// Storage seeded with the built-in fallback data.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidEntry` if a built-in exercise fails validation.
    pub fn builtin() -> Result<Self, StorageError> {
        Self::builtin_with(Vec::new())
    }

    /// Built-in fallback data plus extra entries (extra entries win on conflicts).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the built-in data is invalid or the table lock fails.
    pub fn builtin_with(extra: Vec<FallbackEntry>) -> Result<Self, StorageError> {
        let table = InMemoryFallbackTable::from_entries(builtin::entries()?);
        let added = table.extend(extra)?;
        tracing::debug!(extra = added, total = table.len()?, "fallback table ready");
        let fallback: Arc<dyn FallbackRepository> = Arc::new(table);
        Ok(Self { fallback })
    }
}
