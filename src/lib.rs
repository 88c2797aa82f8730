//! Blocky (workspace facade crate).
//!
//! Re-exports the workspace crates under `blocky::{core,input,term,types}` and
//! hosts the pieces of the terminal binary that are worth testing on their
//! own: environment configuration and the JSON-lines event log.

pub mod config;
pub mod event_log;

pub use blocky_core as core;
pub use blocky_input as input;
pub use blocky_term as term;
pub use blocky_types as types;

pub use config::Config;
pub use event_log::EventLog;
