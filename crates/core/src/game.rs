//! Game module - the tick-driven engine
//!
//! [`Game`] owns the board, the active piece, the pending direction, the lock
//! counter and the bag. The host calls [`Game::step`] at a fixed rate; each
//! step runs, in this order:
//!
//! 1. spawn a piece if none is active (a blocked spawn ends the game),
//! 2. apply the pending horizontal movement,
//! 3. apply gravity, counting obstructed ticks and locking once the counter
//!    has exceeded [`LOCK_DELAY_LIMIT`],
//! 4. delete completed rows.
//!
//! Movement therefore happens before gravity in the same tick, and rows
//! completed by a lock are cleared in that same tick. Rotation is applied
//! immediately through [`Game::rotate_piece`], outside the tick cadence.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::Bag;
use crate::types::*;

/// Where the engine sits in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// No active piece; the next step spawns one.
    Empty,
    /// Active piece, not obstructed on the last gravity tick.
    Falling,
    /// Active piece resting on an obstruction, lock counter in `1..=LOCK_DELAY_LIMIT`.
    Locking,
    /// A spawn was blocked. Terminal.
    GameOver,
}

/// Something observable that happened during the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum GameEvent {
    Spawned {
        kind: PieceKind,
        position: Position,
    },
    Locked {
        kind: PieceKind,
        rotation: u8,
        position: Position,
    },
    LinesCleared {
        count: usize,
    },
    GameOver,
}

/// Spawn anchor for a board of the given width.
///
/// Widths beyond `i32::MAX` saturate; [`Board::new`] never produces one.
pub fn spawn_position(board_width: usize) -> Position {
    let width = i32::try_from(board_width).unwrap_or(i32::MAX);
    Position::new(SPAWN_ROW, width / 2 - 2)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    direction: Direction,
    lock_counter: u32,
    bag: Bag,
    game_over: bool,
    /// Events of the most recent step (or of construction, before the first step).
    events: ArrayVec<GameEvent, 4>,
    ticks: u64,
    pieces_spawned: u64,
    lines_cleared: u64,
}

impl Game {
    /// New game on a default 10x20 board.
    pub fn new(seed: u64) -> Self {
        Self::from_parts(Board::default(), Bag::new(seed))
    }

    pub fn with_dimensions(width: usize, height: usize, seed: u64) -> Self {
        Self::from_parts(Board::new(width, height), Bag::new(seed))
    }

    /// Start a game on a prepared board with a prepared bag.
    ///
    /// The first piece is spawned immediately, so a board whose spawn area is
    /// already blocked yields a game that is over from the start.
    pub fn from_parts(board: Board, bag: Bag) -> Self {
        let mut game = Self {
            board,
            active: None,
            direction: Direction::None,
            lock_counter: 0,
            bag,
            game_over: false,
            events: ArrayVec::new(),
            ticks: 0,
            pieces_spawned: 0,
            lines_cleared: 0,
        };
        game.try_spawn_block();
        game
    }

    /// Advance one tick.
    ///
    /// Once the game is over this only clears the previous step's events.
    pub fn step(&mut self) {
        self.events.clear();
        if self.game_over {
            return;
        }
        self.ticks += 1;

        if !self.try_spawn_block() {
            return;
        }
        self.process_movement();
        self.process_gravity();
        self.process_cleared_lines();
    }

    /// Spawn the next piece if none is active.
    ///
    /// Returns false when the game is over, i.e. the rest of the tick must
    /// not run.
    fn try_spawn_block(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.active.is_some() {
            return true;
        }

        let kind = self.bag.draw();
        let piece = Piece::new(kind, spawn_position(self.board.width()));
        if self.board.collides(&piece) {
            self.game_over = true;
            self.lock_counter = 0;
            self.push_event(GameEvent::GameOver);
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned += 1;
        self.push_event(GameEvent::Spawned {
            kind,
            position: piece.position(),
        });
        true
    }

    fn process_movement(&mut self) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };

        let next = match self.direction {
            Direction::None => piece.position(),
            Direction::Left => piece.position().add(0, -1),
            Direction::Right => piece.position().add(0, 1),
        };
        if !self.board.collides_at(piece.layout(), next) {
            piece.move_to(next);
        }
    }

    fn process_gravity(&mut self) {
        let Some(mut piece) = self.active else {
            return;
        };

        let next = piece.position().add(1, 0);
        if !self.board.collides_at(piece.layout(), next) {
            self.lock_counter = 0;
            piece.move_to(next);
            self.active = Some(piece);
        } else if self.lock_counter < LOCK_DELAY_LIMIT {
            self.lock_counter += 1;
        } else {
            self.board.add_to_well(&piece);
            self.lock_counter = 0;
            self.active = None;
            self.push_event(GameEvent::Locked {
                kind: piece.kind(),
                rotation: piece.rotation(),
                position: piece.position(),
            });
        }
    }

    /// Runs every tick, lock or not; a no-op when nothing is complete.
    fn process_cleared_lines(&mut self) {
        let rows = self.board.completed_rows();
        if rows.is_empty() {
            return;
        }
        self.board.delete_rows(&rows);
        self.lines_cleared += rows.len() as u64;
        self.push_event(GameEvent::LinesCleared { count: rows.len() });
    }

    fn push_event(&mut self, event: GameEvent) {
        // At most spawn + lock + clear (or a lone game over) per step.
        let _ = self.events.try_push(event);
    }

    /// Rotate the active piece, reverting if the result collides.
    ///
    /// Returns whether the rotation was kept. No kicks are attempted.
    pub fn rotate_piece(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let before = piece.rotation();
        piece.rotate(clockwise);
        if self.board.collides(piece) {
            piece.rotate(!clockwise);
            return false;
        }
        piece.rotation() != before
    }

    /// Set the pending horizontal command; it applies on every tick until changed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snapshot of the settled blocks.
    pub fn well(&self) -> Vec<Vec<bool>> {
        self.board.well()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        match (self.game_over, self.active, self.lock_counter) {
            (true, _, _) => Phase::GameOver,
            (false, None, _) => Phase::Empty,
            (false, Some(_), 0) => Phase::Falling,
            (false, Some(_), _) => Phase::Locking,
        }
    }

    pub fn lock_counter(&self) -> u32 {
        self.lock_counter
    }

    /// Events produced by the most recent step.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces_spawned(&self) -> u64 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    pub fn seed(&self) -> u64 {
        self.bag.seed()
    }
}
