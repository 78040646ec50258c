//! Shape module - piece matrices and rotation.
//!
//! A shape is an immutable binary matrix describing which cells of a
//! piece's bounding box are filled. Rotation is a pure transform that
//! produces a new matrix; shapes are never mutated in place. The seven
//! canonical shapes span bounding boxes from 2x2 (O) to 1x4 (I), so a 4x4
//! backing array covers every orientation.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, BOARD_WIDTH};

/// Maximum bounding-box side length across all shapes and rotations
pub const MAX_SHAPE_DIM: usize = 4;

/// Upper bound on filled cells per shape (full 4x4 bounding box)
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Filled-cell offsets relative to a shape's top-left corner, (dx, dy)
pub type CellOffsets = ArrayVec<(i8, i8), MAX_SHAPE_CELLS>;

/// An immutable binary cell matrix with explicit bounding-box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row literals (1 = filled, 0 = empty).
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty or exceeds the 4x4 bounding box.
    /// Shape literals are fixed at compile time, so a malformed matrix is
    /// a programming error, not an input error.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_DIM, "bad shape height");
        assert!(C > 0 && C <= MAX_SHAPE_DIM, "bad shape width");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            width: C as u8,
            height: R as u8,
            cells,
        }
    }

    /// Bounding-box width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding-box height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (row, col) of the bounding box is filled.
    /// Out-of-box coordinates read as empty.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.cells[row][col]
    }

    /// Offsets of all filled cells, as (dx, dy) from the top-left corner.
    pub fn cells(&self) -> CellOffsets {
        let mut offsets = CellOffsets::new();
        for r in 0..self.height as usize {
            for c in 0..self.width as usize {
                if self.cells[r][c] {
                    offsets.push((c as i8, r as i8));
                }
            }
        }
        offsets
    }

    /// Rotate 90° clockwise, returning a new shape.
    ///
    /// Cell (r, c) of an N-row matrix maps to (c, N-1-r) of the result,
    /// whose dimensions are transposed. Applying this four times returns
    /// the original matrix; the O shape is a fixpoint and the I shape has
    /// period two.
    pub fn rotated(&self) -> Shape {
        let n = self.height as usize;
        let m = self.width as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..n {
            for c in 0..m {
                cells[c][n - 1 - r] = self.cells[r][c];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Spawn column for this shape: bounding box horizontally centered.
    pub fn spawn_x(&self) -> i8 {
        ((BOARD_WIDTH - self.width) / 2) as i8
    }
}

impl ShapeKind {
    /// The canonical (unrotated) matrix for this kind.
    pub fn shape(self) -> Shape {
        match self {
            ShapeKind::I => Shape::from_rows([[1, 1, 1, 1]]),
            ShapeKind::T => Shape::from_rows([[1, 1, 1], [0, 1, 0]]),
            ShapeKind::S => Shape::from_rows([[1, 1, 0], [0, 1, 1]]),
            ShapeKind::Z => Shape::from_rows([[0, 1, 1], [1, 1, 0]]),
            ShapeKind::O => Shape::from_rows([[1, 1], [1, 1]]),
            ShapeKind::J => Shape::from_rows([[1, 0, 0], [1, 1, 1]]),
            ShapeKind::L => Shape::from_rows([[0, 0, 1], [1, 1, 1]]),
        }
    }
}
