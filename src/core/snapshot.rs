use crate::core::engine::Piece;
use crate::core::shape::Shape;
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The falling piece as observers see it: shape cells plus grid offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only projection of the complete game state.
///
/// Reflects the state strictly after the most recently applied tick, input,
/// or reset. Plain `Copy` data; holding a snapshot never borrows the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = ActiveSnapshot {
            shape: ShapeKind::I.shape(),
            x: 0,
            y: 0,
        };
        self.over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            board: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                shape: ShapeKind::I.shape(),
                x: 0,
                y: 0,
            },
            over: false,
        };
        snapshot.clear();
        snapshot
    }
}
