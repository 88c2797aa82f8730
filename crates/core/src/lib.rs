//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the falling-block simulation: board, pieces, the bag
//! randomizer and the tick-driven engine. It has **no dependencies** on UI,
//! terminals or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed and inputs produce the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: any host loop can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid, collision queries and row deletion
//! - [`pieces`]: static rotation tables for the seven kinds
//! - [`piece`]: the active piece (kind, rotation, anchor)
//! - [`rng`]: bag randomizer on a seeded ChaCha generator
//! - [`game`]: the engine and its per-tick pipeline
//!
//! # Game Rules
//!
//! - **Bag randomizer**: every kind appears once per 7 draws
//! - **Rotation**: plain state change, reverted if it would collide (no kicks)
//! - **Lock delay**: a resting piece locks on its 31st obstructed gravity tick
//! - **Game over**: a spawn that collides; surfaced through [`Game::is_game_over`]
//!
//! # Example
//!
//! ```
//! use blocky_core::Game;
//! use blocky_types::Direction;
//!
//! let mut game = Game::new(12345);
//! assert!(game.active_piece().is_some());
//!
//! game.set_direction(Direction::Left);
//! game.rotate_piece(true);
//! game.step();
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.well().len(), 20);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;

pub use blocky_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{spawn_position, Game, GameEvent, Phase};
pub use piece::Piece;
pub use pieces::{get_layout, rotation_count, Layout};
pub use rng::{shuffle, Bag};
