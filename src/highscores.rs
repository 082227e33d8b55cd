//! High score leaderboard system
//!
//! Top scores per difficulty, fed by the round's terminal-score event and
//! persisted as JSON on disk.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::Difficulty;

/// Maximum number of high scores kept per difficulty
pub const MAX_HIGH_SCORES: usize = 5;

/// High score leaderboard, one descending list per difficulty
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    tables: HashMap<Difficulty, Vec<u32>>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores for a difficulty, best first
    pub fn scores(&self, difficulty: Difficulty) -> &[u32] {
        self.tables.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, difficulty: Difficulty, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        let scores = self.scores(difficulty);
        if scores.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        scores.last().is_none_or(|&lowest| score > lowest)
    }

    /// Record the score a round ended with.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn record_terminal_score(&mut self, difficulty: Difficulty, score: u32) -> Option<usize> {
        if !self.qualifies(difficulty, score) {
            return None;
        }

        let scores = self.tables.entry(difficulty).or_default();
        // Ties rank below existing entries
        let pos = scores.iter().position(|&s| score > s).unwrap_or(scores.len());
        scores.insert(pos, score);
        scores.truncate(MAX_HIGH_SCORES);

        log::info!(
            "New {} high score {} at rank {}",
            difficulty.as_str(),
            score,
            pos + 1
        );
        Some(pos + 1)
    }

    /// Get the top score (if any)
    pub fn top_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.scores(difficulty).first().copied()
    }

    /// Load high scores from a JSON file; a missing file is an empty board
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut scores: HighScores = serde_json::from_str(&json)?;
        // Hand-edited files may be unsorted or too long
        for table in scores.tables.values_mut() {
            table.sort_unstable_by(|a, b| b.cmp(a));
            table.truncate(MAX_HIGH_SCORES);
        }
        log::info!("Loaded high scores from {}", path.display());
        Ok(scores)
    }

    /// Save high scores to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("High scores saved to {}", path.as_ref().display());
        Ok(())
    }
}
