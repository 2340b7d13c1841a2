//! TUI Snaketris (workspace facade crate).
//!
//! Exposes `tui_snaketris::{core,input,scores,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! binary's own configuration and logging setup.

pub mod config;
pub mod frame_clock;
pub mod logging;

pub use tui_snaketris_core as core;
pub use tui_snaketris_input as input;
pub use tui_snaketris_scores as scores;
pub use tui_snaketris_term as term;
pub use tui_snaketris_types as types;

pub use config::AppConfig;
pub use frame_clock::FrameClock;
