//! High score leaderboard
//!
//! Tracks the top 10 totals. Entries stay sorted by score, highest first; a
//! new score that ties an existing one ranks below it.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    /// Combined Tetris + Snake score
    pub score: u32,
    /// Unix timestamp (ms) when achieved
    #[serde(default)]
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a score if it qualifies. Returns the 1-indexed rank achieved.
    pub fn add_score(&mut self, name: &str, score: u32, timestamp_ms: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                name: name.to_string(),
                score,
                timestamp_ms,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HighScoreEntry> {
        self.entries.iter()
    }

    /// Parse stored JSON. Anything unreadable yields an empty board.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<HighScores>(text) {
            Ok(scores) => scores.normalized(),
            Err(e) => {
                log::warn!("ignoring unreadable high scores: {}", e);
                Self::new()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{\"entries\":[]}"))
    }

    /// Sort (stable, descending), drop zero scores, keep the top 10.
    pub fn normalized(mut self) -> Self {
        self.entries.retain(|e| e.score > 0);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
        self
    }
}
