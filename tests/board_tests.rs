//! Board tests - row detection and collapse

use matrix_tetris::core::{ActivePiece, Board};
use matrix_tetris::types::{PieceKind, Rgb, Rotation, MATRIX_HEIGHT, MATRIX_WIDTH};

const RED: Option<Rgb> = Some(Rgb::new(1.0, 0.0, 0.0));
const BLUE: Option<Rgb> = Some(Rgb::new(0.0, 0.0, 1.0));

#[test]
fn test_board_default_is_matrix_sized_and_empty() {
    let board = Board::default();
    assert_eq!(board.width(), MATRIX_WIDTH);
    assert_eq!(board.height(), MATRIX_HEIGHT);
    assert_eq!(board.occupied_count(), 0);
    assert!(board.scan_completed_rows().is_empty());
}

#[test]
fn test_out_of_grid_reads_as_free() {
    let board = Board::new(8, 4);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(8, 0), None);
    assert!(!board.is_occupied(0, -2));
    assert!(!board.is_occupied(0, 4));
}

#[test]
fn test_completed_rows_detected_exactly() {
    let mut board = Board::new(8, 6);
    board.fill_row_except(5, &[], RED);
    board.fill_row_except(3, &[], RED);
    board.fill_row_except(4, &[2], RED);

    let rows = board.scan_completed_rows();
    assert_eq!(rows.as_slice(), &[3, 5]);
}

#[test]
fn test_scan_is_idempotent() {
    let mut board = Board::new(8, 6);
    board.fill_row_except(5, &[], RED);
    let first = board.scan_completed_rows();
    let second = board.scan_completed_rows();
    assert_eq!(first, second);
    assert_eq!(board.occupied_count(), 8);
}

#[test]
fn test_clear_row_shifts_rows_above_down_by_one() {
    let mut board = Board::new(8, 6);
    board.set(1, 0, BLUE);
    board.set(2, 2, BLUE);
    board.fill_row_except(4, &[], RED);
    board.set(7, 5, BLUE);

    board.clear_row(4);

    // row 0 is now empty, everything above row 4 moved down one
    assert!(board.row(0).iter().all(Option::is_none));
    assert_eq!(board.get(1, 1), Some(BLUE));
    assert_eq!(board.get(2, 3), Some(BLUE));
    assert!(!board.is_occupied(2, 2));
    // row 4 holds the old row 3 (empty)
    assert!(board.row(4).iter().all(Option::is_none));
    // rows below are untouched
    assert_eq!(board.get(7, 5), Some(BLUE));
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_clear_top_row_only_empties_it() {
    let mut board = Board::new(4, 4);
    board.fill_row_except(0, &[], RED);
    board.set(0, 3, BLUE);
    board.clear_row(0);
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_row_out_of_range_is_ignored() {
    let mut board = Board::new(4, 4);
    board.fill_row_except(3, &[], RED);
    board.clear_row(4);
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_commit_scales_color_and_drops_hidden_cells() {
    let mut board = Board::new(16, 8).with_brightness(0.5);
    // vertical I: pivot at y=0, one mino above the grid
    let piece = ActivePiece::at(PieceKind::I, Rotation::R1, 3, 0);
    board.commit(&piece);

    assert_eq!(board.occupied_count(), 3);
    assert!(!board.is_occupied(3, -1));
    assert_eq!(board.get(3, 2), Some(Some(Rgb::new(0.0, 0.5, 0.5))));
}

#[test]
fn test_reset_clears_everything() {
    let mut board = Board::new(8, 8);
    board.fill_row_except(7, &[0], RED);
    board.reset();
    assert_eq!(board.occupied_count(), 0);
}
