//! Board tests - occupancy, boundaries, merging, and row clearing.

use blockfall::core::{Board, Shape};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, true);
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(false));
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_boundaries_count_as_occupied_except_above_skyline() {
    let board = Board::new();

    // Side and bottom boundaries block placement.
    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 5));
    assert!(board.is_occupied(3, BOARD_HEIGHT as i8));

    // Above the visible grid is open space.
    assert!(!board.is_occupied(3, -1));
    assert!(!board.is_occupied(0, -4));

    // But the side walls extend above the skyline too.
    assert!(board.is_occupied(-1, -1));
    assert!(board.is_occupied(BOARD_WIDTH as i8, -2));
}

#[test]
fn test_merge_sets_filled_cells_only() {
    let mut board = Board::new();
    let shape = Shape::from_rows([[1, 1, 1], [0, 1, 0]]);

    board.merge(&shape, 3, 5);

    assert_eq!(board.get(3, 5), Some(true));
    assert_eq!(board.get(4, 5), Some(true));
    assert_eq!(board.get(5, 5), Some(true));
    assert_eq!(board.get(4, 6), Some(true));

    // The matrix's empty corners stay empty.
    assert_eq!(board.get(3, 6), Some(false));
    assert_eq!(board.get(5, 6), Some(false));
}

#[test]
fn test_merge_drops_cells_above_skyline() {
    let mut board = Board::new();
    let shape = Shape::from_rows([[1, 1], [1, 1]]);

    // Top row of the shape lands at y = -1 and is discarded.
    board.merge(&shape, 4, -1);

    assert_eq!(board.get(4, 0), Some(true));
    assert_eq!(board.get(5, 0), Some(true));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 2);
}

#[test]
fn test_clear_full_rows_empty_board_is_noop() {
    let mut board = Board::new();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_full_rows_ignores_partial_rows() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, true);
    }

    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_two_separated_rows_preserves_order() {
    let mut board = Board::new();
    fill_row(&mut board, 2);
    fill_row(&mut board, 5);

    // Markers in distinct columns above, between, and below the full rows.
    board.set(0, 1, true);
    board.set(1, 4, true);
    board.set(2, 10, true);

    assert_eq!(board.clear_full_rows(), 2);

    // Two empty rows are prepended; survivors keep their relative order.
    // Row 1 drops by 2 (both full rows were below it), row 4 by 1, row 10
    // by 0.
    assert_eq!(board.get(0, 3), Some(true));
    assert_eq!(board.get(1, 5), Some(true));
    assert_eq!(board.get(2, 10), Some(true));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 3);

    assert!(!board.is_row_full(2));
    assert!(!board.is_row_full(5));
}

#[test]
fn test_clear_adjacent_rows_in_one_call() {
    let mut board = Board::new();
    fill_row(&mut board, 18);
    fill_row(&mut board, 19);
    board.set(7, 17, true);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(7, 19), Some(true));
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 1);
}

#[test]
fn test_nineteen_line_clear_leaves_empty_board() {
    let mut board = Board::new();

    // Rows 0-18 complete except a single hole at (3, 10).
    for y in 0..19 {
        fill_row(&mut board, y);
    }
    board.set(3, 10, false);

    // A single-cell piece plugs the hole; all 19 rows clear at once.
    let plug = Shape::from_rows([[1]]);
    board.merge(&plug, 3, 10);

    assert_eq!(board.clear_full_rows(), 19);
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_after_clear_is_noop() {
    let mut board = Board::new();
    fill_row(&mut board, 19);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.clear_full_rows(), 0);
}

#[test]
fn test_board_clear_empties_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 4);
    board.set(9, 19, true);

    board.clear();
    assert_eq!(board, Board::new());
}
