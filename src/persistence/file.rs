//! File-backed best score (native)

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{BestScoreStore, format_best, parse_best};

/// Best score kept in a single text file.
///
/// Saves write a sibling `.tmp` file first and rename it over the target, so
/// an interrupted write never leaves a truncated value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl BestScoreStore for FileStore {
    fn load_best(&self) -> Result<Option<u64>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_best(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", self.path.display())),
        }
    }

    fn save_best(&mut self, value: u64) -> Result<()> {
        let tmp = self.tmp_path();
        fs::write(&tmp, format_best(value)).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        log::debug!("Best score {} saved to {}", value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tap-on-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = FileStore::new(scratch_path("missing.txt"));
        assert_eq!(store.load_best().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = FileStore::new(scratch_path("best.txt"));
        store.save_best(30).unwrap();
        assert_eq!(store.load_best().unwrap(), Some(30));
        store.save_best(62).unwrap();
        assert_eq!(store.load_best().unwrap(), Some(62));
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let path = scratch_path("corrupt.txt");
        fs::write(&path, "twelve").unwrap();
        assert!(FileStore::new(&path).load_best().is_err());
        // Leading digits are not enough
        fs::write(&path, "12abc").unwrap();
        assert!(FileStore::new(path).load_best().is_err());
    }
}
