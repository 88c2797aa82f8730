//! Runtime configuration read from `BLOCKY_*` environment variables.

use anyhow::{bail, Context, Result};

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bag seed; `None` picks a random one per game.
    pub seed: Option<u64>,
    pub tick_ms: u32,
    pub board_width: usize,
    pub board_height: usize,
    /// Append-only JSON-lines event log.
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            board_width: BOARD_WIDTH as usize,
            board_height: BOARD_HEIGHT as usize,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables.
    ///
    /// - `BLOCKY_SEED`: u64 bag seed
    /// - `BLOCKY_TICK_MS`: tick interval, > 0
    /// - `BLOCKY_BOARD_WIDTH`: 4..=40
    /// - `BLOCKY_BOARD_HEIGHT`: 8..=40
    /// - `BLOCKY_LOG_PATH`: event log file (blank disables)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let seed = parse_var::<u64>(&lookup, "BLOCKY_SEED")?;
        let tick_ms = parse_var::<u32>(&lookup, "BLOCKY_TICK_MS")?.unwrap_or(defaults.tick_ms);
        if tick_ms == 0 {
            bail!("BLOCKY_TICK_MS must be greater than 0");
        }

        let board_width =
            parse_var::<usize>(&lookup, "BLOCKY_BOARD_WIDTH")?.unwrap_or(defaults.board_width);
        if !(4..=40).contains(&board_width) {
            bail!("BLOCKY_BOARD_WIDTH must be within 4..=40, got {board_width}");
        }
        let board_height =
            parse_var::<usize>(&lookup, "BLOCKY_BOARD_HEIGHT")?.unwrap_or(defaults.board_height);
        if !(8..=40).contains(&board_height) {
            bail!("BLOCKY_BOARD_HEIGHT must be within 8..=40, got {board_height}");
        }

        let log_path = lookup("BLOCKY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            seed,
            tick_ms,
            board_width,
            board_height,
            log_path,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .with_context(|| format!("invalid {key}: {raw:?}"))
}
