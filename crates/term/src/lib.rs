//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries
//! and renders into a plain framebuffer that is flushed to the terminal as a
//! diff against the previous frame.
//!
//! - [`GameView`] turns a snapshot into a framebuffer (pure, testable)
//! - [`TerminalRenderer`] owns the terminal mode and writes changed runs
//! - [`RenderThrottle`] skips frames whose picture did not change

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snaketris_core as core;
pub use tui_snaketris_scores as scores;
pub use tui_snaketris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, NamePrompt, PanelExtras, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
