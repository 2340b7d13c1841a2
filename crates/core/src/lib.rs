//! Core game logic module - pure, deterministic, and testable
//!
//! One 12x20 board shared by two games. A falling tetromino locks into solid
//! cells and clears full rows, while a snake crawls over the same cells
//! eating apples. Both run on their own fixed timers inside a single
//! [`GameState::tick`].
//!
//! The crate has no UI or I/O dependencies. All randomness goes through
//! [`RandomSource`], so the same seed (or script) replays the same game.
//!
//! # Module Structure
//!
//! - [`grid`]: solid/empty cells and row clearing
//! - [`pieces`]: tetromino catalog and rotation states
//! - [`snake`]: body segments and heading
//! - [`rng`]: seeded LCG and scripted sources
//! - [`rules`]: practice mode, gravity rule and timer intervals
//! - [`game_state`]: the shared simulation
//! - [`snapshot`]: owned copies for rendering and fingerprinting
//!
//! # Example
//!
//! ```
//! use tui_snaketris_core::GameState;
//! use tui_snaketris_types::{Direction, GameAction, SNAKE_INTERVAL_MS};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Turn(Direction::Down));
//!
//! let events = game.tick(SNAKE_INTERVAL_MS);
//! assert!(events.snake_moved);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! - **Gravity**: one row every 700ms
//! - **Snake**: one cell every 150ms
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod snake;
pub mod snapshot;

pub use tui_snaketris_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Tetromino, TickEvents};
pub use grid::Grid;
pub use pieces::{get_shape, piece_color, rotation_count};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use rules::Rules;
pub use snake::Snake;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
