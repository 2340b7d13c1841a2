//! Persistent high-score leaderboard.
//!
//! [`HighScores`] is the in-memory top 10; [`ScoreStore`] reads and writes it
//! as JSON. Corrupt files are treated as empty rather than as errors.

pub mod leaderboard;
pub mod store;

pub use leaderboard::{HighScoreEntry, HighScores, MAX_HIGH_SCORES};
pub use store::{ScoreStore, DEFAULT_SCORES_FILE};
