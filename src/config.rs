//! Runtime configuration read from `SNAKETRIS_*` environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Rules;
use crate::scores::DEFAULT_SCORES_FILE;
use crate::types::GravityRule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub disable_game_over: bool,
    pub gravity: GravityRule,
    pub scores_path: PathBuf,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            disable_game_over: false,
            gravity: GravityRule::default(),
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("SNAKETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let disable_game_over = non_empty("SNAKETRIS_NO_GAME_OVER")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let gravity = non_empty("SNAKETRIS_GRAVITY")
            .and_then(|s| GravityRule::from_str(&s))
            .unwrap_or_default();

        let scores_path = non_empty("SNAKETRIS_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_FILE));

        let log_path = non_empty("SNAKETRIS_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            disable_game_over,
            gravity,
            scores_path,
            log_path,
        }
    }

    pub fn rules(&self) -> Rules {
        Rules::default()
            .with_gravity(self.gravity)
            .with_game_over_disabled(self.disable_game_over)
    }
}

/// Seed from the wall clock (never 0)
fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    ((nanos as u64) ^ ((nanos >> 64) as u64)) as u32 | 1
}
