use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Plain-text high score file: a single decimal integer.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score. A missing or unreadable file reads as 0.
    pub fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring malformed high score file {}", self.path.display());
                0
            }),
            Err(_) => 0,
        }
    }

    pub fn save(&self, high_score: u32) -> Result<(), StorageError> {
        std::fs::write(&self.path, high_score.to_string()).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("high score {} saved to {}", high_score, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("titan-host-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_reads_zero() {
        let store = HighScoreStore::new(temp_file("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = temp_file("roundtrip");
        let store = HighScoreStore::new(&path);
        store.save(130).unwrap();
        assert_eq!(store.load(), 130);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn malformed_file_reads_zero() {
        let path = temp_file("garbage");
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);
        let _ = std::fs::remove_file(path);
    }
}
