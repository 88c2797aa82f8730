//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The host
//! decides how a command reaches the engine: moves become the pending
//! direction for the next tick, rotations are applied immediately.

pub mod map;

pub use blocky_types as types;

pub use map::{handle_key_event, should_quit};
