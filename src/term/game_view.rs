//! GameView: maps a `GameSnapshot` into terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Glyphs per cell state. Cells are two characters wide to compensate for
/// the terminal glyph aspect ratio.
const LOCKED: &str = "██";
const FALLING: &str = "▓▓";
const EMPTY: &str = " .";

/// Renders snapshots into a bordered text frame.
pub struct GameView;

impl GameView {
    /// Render the snapshot as one text line per terminal row.
    pub fn render(&self, snapshot: &GameSnapshot) -> Vec<String> {
        let width = BOARD_WIDTH as usize;
        let height = BOARD_HEIGHT as usize;

        let horizontal = "─".repeat(width * 2);
        let mut lines = Vec::with_capacity(height + 3);
        lines.push(format!("┌{}┐", horizontal));

        for y in 0..height {
            let mut line = String::with_capacity(width * 2 + 2);
            line.push('│');
            for x in 0..width {
                line.push_str(self.cell_glyph(snapshot, x, y));
            }
            line.push('│');
            lines.push(line);
        }

        lines.push(format!("└{}┘", horizontal));
        lines.push(self.status_line(snapshot));
        lines
    }

    fn cell_glyph(&self, snapshot: &GameSnapshot, x: usize, y: usize) -> &'static str {
        if snapshot.board[y][x] {
            return LOCKED;
        }
        if self.active_covers(snapshot, x, y) {
            return FALLING;
        }
        EMPTY
    }

    fn active_covers(&self, snapshot: &GameSnapshot, x: usize, y: usize) -> bool {
        let active = &snapshot.active;
        active.shape.cells().iter().any(|&(dx, dy)| {
            active.x as i32 + dx as i32 == x as i32 && active.y as i32 + dy as i32 == y as i32
        })
    }

    fn status_line(&self, snapshot: &GameSnapshot) -> String {
        if snapshot.over {
            " GAME OVER - press r to restart, q to quit".to_string()
        } else {
            " arrows/wasd: move · drop · rotate  r: restart  q: quit".to_string()
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self
    }
}
