//! Browser LocalStorage best score (wasm)

use anyhow::{Result, anyhow};
use web_sys::Storage;

use super::{BestScoreStore, format_best, parse_best};
use crate::consts::BEST_SCORE_KEY;

/// Best score under a single LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(BEST_SCORE_KEY)
    }
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| anyhow!("LocalStorage unavailable"))
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<Option<u64>> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => parse_best(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(anyhow!("read {}: {:?}", self.key, e)),
        }
    }

    fn save_best(&mut self, value: u64) -> Result<()> {
        let storage = Self::storage()?;
        storage
            .set_item(&self.key, &format_best(value))
            .map_err(|e| anyhow!("write {}: {:?}", self.key, e))?;
        log::info!("Best score saved ({})", value);
        Ok(())
    }
}
