//! Engine module - spawn, gravity, input application, locking, clearing.
//!
//! The engine owns the complete game state and is its sole mutator. Two
//! external stimuli drive it: a periodic gravity tick and discrete player
//! commands. Both arrive through `&mut self` entry points, so all mutation
//! is serialized by construction; observers only ever see immutable
//! snapshots.

use crate::core::rng::ShapePicker;
use crate::core::snapshot::GameSnapshot;
use crate::core::{Board, Shape};
use crate::types::{Command, ShapeKind};

/// The active falling piece: a shape anchored at a grid offset.
///
/// (x, y) addresses the top-left cell of the shape's bounding box. The
/// piece is replaced on every spawn and consumed when it locks into the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position
    /// (horizontally centered, top row).
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = kind.shape();
        Self {
            shape,
            x: shape.spawn_x(),
            y: 0,
        }
    }

    /// Whether any filled cell overlaps an occupied board cell or crosses
    /// the side/bottom boundaries.
    pub fn collides(&self, board: &Board) -> bool {
        self.shape
            .cells()
            .iter()
            .any(|&(dx, dy)| board.is_occupied(self.x + dx, self.y + dy))
    }
}

/// The game engine: one board, one active piece, one terminal flag.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Piece,
    over: bool,
    shapes: ShapePicker,
}

impl Engine {
    /// Create a running engine with an empty board and a freshly spawned
    /// piece. The seed fixes the shape sequence.
    pub fn new(seed: u32) -> Self {
        let mut shapes = ShapePicker::new(seed);
        let active = Piece::spawn(shapes.draw());
        Self {
            board: Board::new(),
            active,
            over: false,
            shapes,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn over(&self) -> bool {
        self.over
    }

    /// Gravity step: move the active piece down one row, or lock it.
    ///
    /// When the cell below is blocked the piece is merged into the board at
    /// its current position, full rows are cleared, and the next piece is
    /// spawned. A spawn that immediately collides ends the game; the board
    /// is left exactly as locked (no garbage is merged above the skyline
    /// and nothing is auto-reset). No-op once the game is over.
    pub fn tick(&mut self) {
        if self.over {
            return;
        }

        if self.fits(&self.active.shape, self.active.x, self.active.y + 1) {
            self.active.y += 1;
            return;
        }

        self.board
            .merge(&self.active.shape, self.active.x, self.active.y);
        self.board.clear_full_rows();
        self.spawn();
    }

    /// Apply a player command. Blocked moves and rotations are silently
    /// rejected; `Down` is the same transition as a gravity tick. No-op
    /// once the game is over.
    pub fn input(&mut self, cmd: Command) {
        if self.over {
            return;
        }

        match cmd {
            Command::Left => self.shift(-1),
            Command::Right => self.shift(1),
            Command::Down => self.tick(),
            Command::Rotate => self.rotate(),
        }
    }

    /// Clear the board, spawn a fresh piece, and return to the running
    /// state. Callable whether or not the game is over.
    pub fn reset(&mut self) {
        self.board.clear();
        self.over = false;
        self.spawn();
    }

    /// Fill a caller-owned snapshot with the state after the most recent
    /// mutation (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.into();
        out.over = self.over;
    }

    /// Allocate-and-fill convenience over [`snapshot_into`].
    ///
    /// [`snapshot_into`]: Engine::snapshot_into
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    /// All-or-nothing collision test shared by gravity, shifts, and
    /// rotation.
    fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .cells()
            .iter()
            .all(|&(dx, dy)| !self.board.is_occupied(x + dx, y + dy))
    }

    fn shift(&mut self, dx: i8) {
        if self.fits(&self.active.shape, self.active.x + dx, self.active.y) {
            self.active.x += dx;
        }
    }

    /// Rotate clockwise in place. The rotated matrix must fit at the
    /// current offset; there are no kick attempts.
    fn rotate(&mut self) {
        let rotated = self.active.shape.rotated();
        if self.fits(&rotated, self.active.x, self.active.y) {
            self.active.shape = rotated;
        }
    }

    /// Spawn the next piece; a spawn-position collision is the game-over
    /// trigger. The colliding piece is kept as the active piece (un-merged)
    /// so observers can present the final stack.
    fn spawn(&mut self) {
        let piece = Piece::spawn(self.shapes.draw());
        if piece.collides(&self.board) {
            self.over = true;
        }
        self.active = piece;
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn force_active(&mut self, piece: Piece) {
        self.active = piece;
    }
}
