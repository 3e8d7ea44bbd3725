#![forbid(unsafe_code)]

pub mod builtin;
pub mod repository;

pub use repository::{
    FallbackEntry, FallbackRepository, InMemoryFallbackTable, Storage, StorageError,
    load_entries, parse_entries,
};
