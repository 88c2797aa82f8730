//! Pieces module - the static tetromino catalog
//!
//! Every kind has a table of rotation states; each state lists the 4 occupied
//! cells as `(row, col)` offsets inside a 4x4 box anchored at the piece
//! position. Rotation state 0 is the spawn orientation and higher indices
//! follow clockwise. `O` has a single state; the others have four.

use crate::types::{PieceKind, Position};

/// Occupied cells of one rotation state, relative to the piece anchor.
pub type Layout = [Position; 4];

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

const I_LAYOUTS: [Layout; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
];

const O_LAYOUTS: [Layout; 1] = [[p(0, 1), p(0, 2), p(1, 1), p(1, 2)]];

const T_LAYOUTS: [Layout; 4] = [
    [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
];

const S_LAYOUTS: [Layout; 4] = [
    [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
];

const Z_LAYOUTS: [Layout; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
];

const J_LAYOUTS: [Layout; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
];

const L_LAYOUTS: [Layout; 4] = [
    [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

/// All rotation states of a kind, in clockwise order.
pub fn layouts(kind: PieceKind) -> &'static [Layout] {
    match kind {
        PieceKind::I => &I_LAYOUTS,
        PieceKind::O => &O_LAYOUTS,
        PieceKind::T => &T_LAYOUTS,
        PieceKind::S => &S_LAYOUTS,
        PieceKind::Z => &Z_LAYOUTS,
        PieceKind::J => &J_LAYOUTS,
        PieceKind::L => &L_LAYOUTS,
    }
}

/// Number of distinct rotation states of a kind.
pub fn rotation_count(kind: PieceKind) -> u8 {
    layouts(kind).len() as u8
}

/// Layout of `kind` in rotation state `rotation` (taken modulo the state count).
pub fn get_layout(kind: PieceKind, rotation: u8) -> &'static Layout {
    let states = layouts(kind);
    &states[rotation as usize % states.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_has_four_distinct_cells_inside_the_box() {
        for kind in PieceKind::ALL {
            for layout in layouts(kind) {
                for (i, a) in layout.iter().enumerate() {
                    assert!((0..4).contains(&a.row) && (0..4).contains(&a.col));
                    for b in &layout[i + 1..] {
                        assert_ne!(a, b, "{:?} has a duplicate cell", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn rotation_counts() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        for kind in [
            PieceKind::I,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(rotation_count(kind), 4);
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(get_layout(PieceKind::T, 4), get_layout(PieceKind::T, 0));
        assert_eq!(get_layout(PieceKind::O, 3), get_layout(PieceKind::O, 0));
    }
}
