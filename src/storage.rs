//! High-score persistence: one integer in a plain-text file.
//!
//! Persistence failures are absorbed rather than surfaced: a missing or
//! unreadable file loads as 0, and a failed save is dropped without retry.
//! The game must never terminate over the high score.

use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file store for the highest score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the stored high score, defaulting to 0 when the file is missing
    /// or does not parse
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| contents.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Write the high score, ignoring I/O failures
    pub fn save(&self, score: u32) {
        let _ = fs::write(&self.path, score.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> HighScoreStore {
        let mut path = env::temp_dir();
        path.push(format!("retro_snake_{}_{}.txt", name, std::process::id()));
        let _ = fs::remove_file(&path);
        HighScoreStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("roundtrip");
        store.save(42);
        assert_eq!(store.load(), 42);
        store.save(7);
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn test_garbage_contents_load_zero() {
        let store = temp_store("garbage");
        fs::write(&store.path, "not a number").unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let store = temp_store("whitespace");
        fs::write(&store.path, " 15\n").unwrap();
        assert_eq!(store.load(), 15);
    }
}
