//! Board module - manages the occupancy grid ("well")
//!
//! The board is a `width x height` grid of booleans stored as a flat,
//! row-major vector. Row 0 is the top. A cell is occupied iff it holds a
//! settled block; the falling piece is never written here until it locks.

use crate::piece::Piece;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// If either dimension is zero or does not fit in an `i32` coordinate.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be non-zero, got {width}x{height}"
        );
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "board dimensions must fit in i32, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if `pos` is inside the grid and holds a settled block.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.index(pos).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Set a cell directly. Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, occupied: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = occupied;
                true
            }
            None => false,
        }
    }

    /// Would `layout` anchored at `candidate` leave the grid or overlap a block?
    pub fn collides_at(&self, layout: &[Position], candidate: Position) -> bool {
        layout.iter().any(|&cell| match self.index(candidate.offset(cell)) {
            Some(i) => self.cells[i],
            None => true,
        })
    }

    /// [`Board::collides_at`] for the piece at its current anchor.
    pub fn collides(&self, piece: &Piece) -> bool {
        self.collides_at(piece.layout(), piece.position())
    }

    /// Merge a piece into the well. Placement legality is the caller's job.
    pub fn add_to_well(&mut self, piece: &Piece) {
        for cell in piece.cells() {
            self.set(cell, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width].iter().all(|&c| c)
    }

    /// Indices of all completely filled rows, ascending.
    pub fn completed_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove the given rows and let everything above fall into place.
    ///
    /// Rows are compacted bottom-up in a single pass; the freed rows at the
    /// top are cleared. Indices outside the board are ignored.
    pub fn delete_rows(&mut self, rows: &[usize]) {
        let doomed = |row: usize| rows.contains(&row);
        if !(0..self.height).any(doomed) {
            return;
        }

        let width = self.width;
        let mut write_row = self.height;
        for read_row in (0..self.height).rev() {
            if doomed(read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(false);
    }

    /// Snapshot of the grid, one `Vec` per row, for rendering.
    pub fn well(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.width).map(<[bool]>::to_vec).collect()
    }

    /// Borrow the flat row-major storage.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH as usize, BOARD_HEIGHT as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, row: i32) {
        for col in 0..board.width() as i32 {
            board.set(Position::new(row, col), true);
        }
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_width_is_rejected() {
        Board::new(0, 20);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_height_is_rejected() {
        Board::new(10, 0);
    }

    #[test]
    fn one_by_one_board_is_usable() {
        let mut board = Board::new(1, 1);
        assert_eq!(board.well(), vec![vec![false]]);
        assert!(!board.is_row_full(0));
        board.set(Position::new(0, 0), true);
        assert_eq!(board.completed_rows(), vec![0]);
    }

    #[test]
    fn index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(Position::new(0, 0)), Some(0));
        assert_eq!(board.index(Position::new(0, 9)), Some(9));
        assert_eq!(board.index(Position::new(1, 0)), Some(10));
        assert_eq!(board.index(Position::new(19, 9)), Some(199));
        assert_eq!(board.index(Position::new(0, -1)), None);
        assert_eq!(board.index(Position::new(0, 10)), None);
        assert_eq!(board.index(Position::new(20, 0)), None);
    }

    #[test]
    fn collides_at_reports_bounds_and_blocks() {
        let mut board = Board::default();
        let layout = [Position::new(0, 0)];

        assert!(!board.collides_at(&layout, Position::new(0, 0)));
        assert!(board.collides_at(&layout, Position::new(-1, 0)));
        assert!(board.collides_at(&layout, Position::new(20, 0)));
        assert!(board.collides_at(&layout, Position::new(0, -1)));
        assert!(board.collides_at(&layout, Position::new(0, 10)));

        board.set(Position::new(7, 7), true);
        assert!(board.collides_at(&layout, Position::new(7, 7)));
    }

    #[test]
    fn add_to_well_marks_piece_cells() {
        let mut board = Board::default();
        let piece = Piece::new(PieceKind::O, Position::new(18, 0));
        board.add_to_well(&piece);

        for cell in piece.cells() {
            assert!(board.is_occupied(cell));
        }
        assert_eq!(board.cells().iter().filter(|&&c| c).count(), 4);
        assert!(board.collides(&piece));
    }

    #[test]
    fn delete_rows_shifts_rows_above_by_removed_count() {
        let mut board = Board::default();
        fill_row(&mut board, 2);
        fill_row(&mut board, 5);
        board.set(Position::new(0, 1), true);
        board.set(Position::new(3, 4), true);
        board.set(Position::new(9, 9), true);

        assert_eq!(board.completed_rows(), vec![2, 5]);
        board.delete_rows(&[2, 5]);

        // Row 0 had two removed rows below it, row 3 one, row 9 none.
        assert!(board.is_occupied(Position::new(2, 1)));
        assert!(board.is_occupied(Position::new(4, 4)));
        assert!(board.is_occupied(Position::new(9, 9)));
        assert_eq!(board.cells().iter().filter(|&&c| c).count(), 3);
        assert!(board.well()[0].iter().all(|&c| !c));
        assert!(board.well()[1].iter().all(|&c| !c));
        assert!(board.completed_rows().is_empty());
    }

    #[test]
    fn delete_rows_ignores_out_of_range_and_empty_input() {
        let mut board = Board::default();
        board.set(Position::new(19, 0), true);
        let before = board.clone();

        board.delete_rows(&[]);
        board.delete_rows(&[20, 100]);
        assert_eq!(board, before);
    }
}
