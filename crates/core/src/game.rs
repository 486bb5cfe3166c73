//! Game module - the spawn / fall / lock state machine
//!
//! Ties together the board, the active piece and the shape picker. Every state
//! change goes through [`Game::handle`]; callers that drive the game from more
//! than one source must serialize their calls (see the engine crate).

use log::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::piece::{Direction, Piece};
use crate::rng::ShapePicker;
use crate::types::{Coord, Move, ShapeKind, PIECE_CELLS};

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between a lock and the next piece appearing
    Spawning,
    /// A piece is falling and accepts moves
    Falling,
    /// The last spawned piece did not fit; terminal
    GameOver,
}

/// What happened when a piece locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: ShapeKind,
    pub cells: [Coord; PIECE_CELLS],
    /// Original indices of the rows removed by this lock, ascending
    pub cleared_rows: Vec<i32>,
    /// The piece spawned after this lock did not fit
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    picker: ShapePicker,
    phase: Phase,
    spawn_anchor: Coord,
    /// Last lock event (consumed by observers).
    last_lock: Option<LockEvent>,
    locks: u32,
    rows_cleared: u32,
}

impl Game {
    /// Create a game on an empty board and spawn the first piece.
    pub fn new(config: &GameConfig, catalog: Vec<ShapeKind>) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        let board = Board::new(config.width, config.height, config.border_size);
        Ok(Self::build(board, catalog, config.seed))
    }

    /// Create a game on a pre-populated board and spawn the first piece.
    ///
    /// The first spawn may already end the game if the board is full enough.
    pub fn with_board(
        board: Board,
        catalog: Vec<ShapeKind>,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            width: board.width(),
            height: board.height(),
            border_size: board.border_size(),
            seed,
            ..GameConfig::default()
        };
        config.validate(&catalog)?;
        Ok(Self::build(board, catalog, seed))
    }

    fn build(board: Board, catalog: Vec<ShapeKind>, seed: u32) -> Self {
        let spawn_anchor = Coord::new(board.width() / 2, 0);
        let mut picker = ShapePicker::new(catalog, seed);
        let first = picker.draw();

        let mut game = Self {
            board,
            current: Piece::spawn(first, spawn_anchor),
            picker,
            phase: Phase::Spawning,
            spawn_anchor,
            last_lock: None,
            locks: 0,
            rows_cleared: 0,
        };
        game.enter_falling();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// Cells of the falling piece (for drawing)
    pub fn current_cells(&self) -> [Coord; PIECE_CELLS] {
        *self.current.cells()
    }

    /// Settled bricks (for drawing)
    pub fn settled_cells(&self) -> impl Iterator<Item = (Coord, ShapeKind)> + '_ {
        self.board.settled_cells()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Pieces locked so far
    pub fn locks(&self) -> u32 {
        self.locks
    }

    /// Rows removed so far
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Apply a move request.
    ///
    /// Returns true if the game state changed. Infeasible moves and any move
    /// after game over are no-ops.
    pub fn handle(&mut self, mv: Move) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        match mv {
            Move::Left => self.try_translate(-1, 0),
            Move::Right => self.try_translate(1, 0),
            Move::RotateCw => self.try_rotate(Direction::Cw),
            Move::RotateCcw => self.try_rotate(Direction::Ccw),
            Move::Descend => {
                if !self.try_translate(0, 1) {
                    self.lock_piece();
                }
                true
            }
        }
    }

    fn try_translate(&mut self, dx: i32, dy: i32) -> bool {
        if self.current.can_translate(&self.board, dx, dy) {
            self.current.translate(dx, dy);
            true
        } else {
            false
        }
    }

    fn try_rotate(&mut self, direction: Direction) -> bool {
        if self.current.can_rotate(&self.board, direction) {
            self.current.rotate(direction);
            true
        } else {
            false
        }
    }

    /// Commit the falling piece, clear rows and spawn the next one
    fn lock_piece(&mut self) {
        let piece = self.current;
        self.board.commit(piece.cells(), piece.kind());
        let cleared_rows = self.board.clear_completed_rows();

        self.locks += 1;
        self.rows_cleared += cleared_rows.len() as u32;
        debug!(
            "locked {:?} at {:?}, cleared {} row(s)",
            piece.kind(),
            piece.cells(),
            cleared_rows.len()
        );

        self.phase = Phase::Spawning;
        let spawned = self.spawn_piece();

        self.last_lock = Some(LockEvent {
            kind: piece.kind(),
            cells: *piece.cells(),
            cleared_rows,
            game_over: !spawned,
        });
    }

    /// Spawn a new piece from the catalog.
    ///
    /// Returns false (and ends the game) if the spawn cells are blocked.
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase != Phase::Spawning {
            return false;
        }
        let kind = self.picker.draw();
        self.current = Piece::spawn(kind, self.spawn_anchor);
        self.enter_falling()
    }

    fn enter_falling(&mut self) -> bool {
        if self.board.can_occupy(self.current.cells()) {
            self.phase = Phase::Falling;
            true
        } else {
            self.phase = Phase::GameOver;
            info!(
                "game over: {:?} blocked at spawn after {} locks, {} rows",
                self.current.kind(),
                self.locks,
                self.rows_cleared
            );
            false
        }
    }
}
