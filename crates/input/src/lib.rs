//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! the line editor used by the high-score name prompt. Independent of any UI
//! framework.

pub mod map;
pub mod name;

pub use tui_snaketris_types as types;

pub use map::{handle_key_event, should_quit};
pub use name::{NameEntry, NameInput, DEFAULT_NAME, MAX_NAME_LEN};
