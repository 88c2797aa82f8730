//! Piece module - the active falling tetromino

use crate::pieces::{get_layout, rotation_count, Layout};
use crate::types::{PieceKind, Position};

/// A tetromino instance: kind, rotation state and anchor position.
///
/// `Piece` never consults the board. Callers validate a placement with
/// [`crate::Board::collides`] before or after mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: u8,
    position: Position,
}

impl Piece {
    /// Create a piece in rotation state 0 anchored at `position`.
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            rotation: 0,
            position,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Relative cells of the current rotation state.
    pub fn layout(&self) -> &'static Layout {
        get_layout(self.kind, self.rotation)
    }

    /// Absolute cells occupied at the current anchor.
    pub fn cells(&self) -> [Position; 4] {
        self.layout().map(|cell| self.position.offset(cell))
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Step the rotation state one notch; the anchor stays put.
    pub fn rotate(&mut self, clockwise: bool) {
        let count = rotation_count(self.kind);
        self.rotation = if clockwise {
            (self.rotation + 1) % count
        } else {
            (self.rotation + count - 1) % count
        };
    }
}
