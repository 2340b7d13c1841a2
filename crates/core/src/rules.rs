//! Rules - per-game behaviour switches and timer intervals

use crate::types::{GravityRule, SNAKE_INTERVAL_MS, TETRIS_INTERVAL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Practice mode: no condition ends the game.
    pub disable_game_over: bool,
    pub gravity: GravityRule,
    pub tetris_interval_ms: u32,
    pub snake_interval_ms: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            disable_game_over: false,
            gravity: GravityRule::default(),
            tetris_interval_ms: TETRIS_INTERVAL_MS,
            snake_interval_ms: SNAKE_INTERVAL_MS,
        }
    }
}

impl Rules {
    pub fn with_gravity(mut self, gravity: GravityRule) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_game_over_disabled(mut self, disabled: bool) -> Self {
        self.disable_game_over = disabled;
        self
    }
}
