//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Game, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Position};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the game into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let board = game.board();
        let board_px_w = board.width() as u16 * self.cell_w;
        let board_px_h = board.height() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for row in 0..board.height() as i32 {
            for col in 0..board.width() as i32 {
                let pos = Position::new(row, col);
                if board.is_occupied(pos) {
                    let settled = CellStyle::fg(Rgb::new(170, 170, 180)).on(PLAYFIELD_BG);
                    self.fill_cell(fb, origin, pos, '█', settled);
                } else {
                    let empty = CellStyle::fg(Rgb::new(90, 90, 100)).on(PLAYFIELD_BG).dim();
                    self.fill_cell(fb, origin, pos, '·', empty);
                }
            }
        }

        if let Some(piece) = game.active_piece() {
            let style = CellStyle::fg(piece_color(piece.kind())).on(PLAYFIELD_BG).bold();
            for pos in piece.cells() {
                self.fill_cell(fb, origin, pos, '█', style);
            }
        }

        self.draw_side_panel(fb, game, viewport, origin, frame_w);

        if game.phase() == Phase::GameOver {
            let lines = ["GAME OVER", "r restart", "q quit"];
            self.draw_overlay(fb, origin, frame_w, frame_h, &lines);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.put_char(o.x, o.y, '┌', style);
        fb.put_char(o.x + w - 1, o.y, '┐', style);
        fb.put_char(o.x, o.y + h - 1, '└', style);
        fb.put_char(o.x + w - 1, o.y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(o.x + dx, o.y, '─', style);
            fb.put_char(o.x + dx, o.y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(o.x, o.y + dy, '│', style);
            fb.put_char(o.x + w - 1, o.y + dy, '│', style);
        }
    }

    /// Paint one board cell; positions outside the board (e.g. a piece
    /// poking above row 0) are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        o: Origin,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        let (Ok(col), Ok(row)) = (u16::try_from(pos.col), u16::try_from(pos.row)) else {
            return;
        };
        let px = o.x + 1 + col * self.cell_w;
        let py = o.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        o: Origin,
        frame_w: u16,
    ) {
        let panel_x = o.x.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 10 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let rows = [
            ("LINES", game.lines_cleared().to_string()),
            ("PIECES", game.pieces_spawned().to_string()),
            ("TICKS", game.ticks().to_string()),
            ("SEED", game.seed().to_string()),
        ];

        let mut y = o.y;
        for (name, text) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &text, value);
            y = y.saturating_add(3);
        }

        if let Some(piece) = game.active_piece() {
            let dim = CellStyle { dim: true, ..value };
            fb.put_str(panel_x, y, piece_letter(piece.kind()), label);
            if game.phase() == Phase::Locking {
                fb.put_str(panel_x + 2, y, "locking", dim);
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        o: Origin,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let top = o.y + frame_h / 2 - (lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = o.x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

/// Top-left corner of the board frame.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
        PieceKind::J => "J",
        PieceKind::L => "L",
    }
}
