//! On-disk leaderboard file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::leaderboard::HighScores;

/// Default file name, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "snaketris_scores.json";

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the leaderboard. A missing or unreadable file is an empty board.
    pub fn load(&self) -> HighScores {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                log::info!("no high scores at {}: {}", self.path.display(), e);
                return HighScores::new();
            }
        };
        let scores = HighScores::from_json(&text);
        log::info!("loaded {} high scores", scores.len());
        scores
    }

    pub fn save(&self, scores: &HighScores) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, scores.to_json())
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::info!("high scores saved ({} entries)", scores.len());
        Ok(())
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES_FILE)
    }
}
