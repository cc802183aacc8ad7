//! Best-score persistence
//!
//! A single scalar, stored as a tiny JSON record. A missing or corrupt file
//! degrades to zero; write failures are logged and never surface to gameplay.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BestScore {
    pub score: u32,
}

impl BestScore {
    /// Load the best score, degrading to 0 on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(best) => best,
                Err(err) => {
                    log::warn!("Best-score file unreadable ({err}), starting at 0");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No best-score file, starting at 0");
                Self::default()
            }
        }
    }

    /// Persist `score` if it beats the stored best; returns true on a new best
    pub fn update(&mut self, score: u32, path: &Path) -> bool {
        if score <= self.score {
            return false;
        }
        self.score = score;
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save best score: {err}");
                } else {
                    log::info!("New best score saved: {}", self.score);
                }
            }
            Err(err) => log::warn!("Failed to serialize best score: {err}"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_zero() {
        let path = std::env::temp_dir().join("lane_racer_best_missing.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(BestScore::load(&path).score, 0);
    }

    #[test]
    fn update_only_on_improvement() {
        let path = std::env::temp_dir().join("lane_racer_best_test.json");
        let _ = std::fs::remove_file(&path);

        let mut best = BestScore::load(&path);
        assert!(best.update(300, &path));
        assert!(!best.update(150, &path));
        assert_eq!(best.score, 300);

        // A fresh load sees the persisted value
        assert_eq!(BestScore::load(&path).score, 300);
        let _ = std::fs::remove_file(&path);
    }
}
