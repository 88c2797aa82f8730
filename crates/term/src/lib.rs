//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a simple framebuffer that is flushed to the terminal with `crossterm`,
//! rather than going through a widget/layout toolkit.
//!
//! Goals:
//! - Keep `core` free of any drawing concerns
//! - Precise control over aspect ratio (2 chars wide per board cell)
//! - Only re-emit the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocky_core as core;
pub use blocky_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
