//! Best score persistence
//!
//! A single integer stored as a decimal string under one key. Backends:
//! - `MemoryStore`: in-process, for tests and headless runs
//! - `FileStore`: one small text file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm)
//!
//! Errors are reported to the caller, which decides how to degrade. The round
//! engine treats a failed load as 0 and a failed save as a warning.

use anyhow::{Context, Result};

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Port for loading and saving the best score
pub trait BestScoreStore {
    /// Stored best score, `None` when nothing has been saved yet
    fn load_best(&self) -> Result<Option<u64>>;

    /// Overwrite the stored best score
    fn save_best(&mut self, value: u64) -> Result<()>;
}

/// Parse a stored best score.
///
/// Only a whole decimal number (surrounding whitespace allowed) is accepted;
/// `"12abc"` is an error, not 12.
pub fn parse_best(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("stored best score {raw:?} is not a decimal integer"))
}

/// Format a best score for storage
pub fn format_best(value: u64) -> String {
    value.to_string()
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a best score
    pub fn with_best(value: u64) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> Result<Option<u64>> {
        Ok(self.value)
    }

    fn save_best(&mut self, value: u64) -> Result<()> {
        self.value = Some(value);
        self.saves += 1;
        Ok(())
    }
}
