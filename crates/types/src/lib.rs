//! Core types module - shared data structures and constants
//!
//! This module defines the value types passed between the simulation core,
//! the input layer and the renderer. Nothing here owns game state.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: row 4, column `width / 2 - 2`
//!
//! # Timing
//!
//! The core is tick-driven and has no clock of its own:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default host tick interval (~60 FPS) |
//! | `LOCK_DELAY_LIMIT` | 30 | Obstructed ticks tolerated before a piece locks |
//!
//! # Examples
//!
//! ```
//! use blocky_types::{Direction, PieceKind, Position, BOARD_WIDTH};
//!
//! let kind: PieceKind = "t".parse().unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let dir: Direction = "LEFT".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!("up".parse::<Direction>().is_err());
//!
//! let p = Position::new(4, BOARD_WIDTH as i32 / 2 - 2);
//! assert_eq!(p.add(1, 0), Position::new(5, 3));
//! ```

use std::fmt;
use std::str::FromStr;

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row of the anchor of every freshly spawned piece.
pub const SPAWN_ROW: i32 = 4;

/// Default host tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of consecutive obstructed gravity ticks a piece survives.
///
/// The piece locks on the tick after the counter reaches this value.
pub const LOCK_DELAY_LIMIT: u32 = 30;

/// Errors raised when host-provided values cannot be mapped onto core types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unrecognized direction: {0}")]
    UnrecognizedDirection(String),
    #[error("unrecognized piece kind: {0}")]
    UnrecognizedPieceKind(String),
}

/// A cell coordinate on the board: `row` grows downwards, `col` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by `(dr, dc)`, returning a new position.
    pub const fn add(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Translate by another position treated as an offset.
    pub const fn offset(self, by: Position) -> Self {
        self.add(by.row, by.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// The full catalog in canonical order. Read-only; randomizers shuffle a copy.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of kinds in the catalog (the bag size).
    pub const COUNT: usize = Self::ALL.len();

    /// Convert to lowercase string representation
    ///
    /// ```
    /// use blocky_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::O.as_str(), "o");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

impl FromStr for PieceKind {
    type Err = Error;

    /// Parse piece kind from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "o" => Ok(PieceKind::O),
            "t" => Ok(PieceKind::T),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            _ => Err(Error::UnrecognizedPieceKind(s.to_string())),
        }
    }
}

/// Pending horizontal movement applied on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction.
    pub fn dc(&self) -> i32 {
        match self {
            Direction::None => 0,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Direction::None),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(Error::UnrecognizedDirection(s.to_string())),
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = Error;

    /// Map a signed column delta onto a direction. Only -1, 0 and 1 are valid.
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::None),
            -1 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            other => Err(Error::UnrecognizedDirection(other.to_string())),
        }
    }
}

/// Host-level intent produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Direction),
    Rotate { clockwise: bool },
    Restart,
}
