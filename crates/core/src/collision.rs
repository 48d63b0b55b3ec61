//! Collision resolution for the active piece
//!
//! [`resolve`] runs once per tick after a tentative move was applied. It walks
//! the piece's minos in catalog order and the first offending mino decides the
//! outcome; later minos are not inspected.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::Intent;

/// Result of validating the active piece against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Tentative position stands.
    Valid,
    /// Move was undone (or the piece was pushed back inside the walls); keep falling.
    Blocked,
    /// Piece can no longer fall and must be committed to the board.
    Settle,
    /// Piece collided while moving down into row 0.
    GameOver,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Valid => "valid",
            Outcome::Blocked => "blocked",
            Outcome::Settle => "settle",
            Outcome::GameOver => "game_over",
        }
    }
}

/// Validate `piece` against `board`, rolling back the tentative move when needed.
pub fn resolve(piece: &mut ActivePiece, board: &Board) -> Outcome {
    let width = board.width() as i8;
    let floor = board.height() as i8 - 1;

    for (x, y) in piece.cells() {
        if board.is_occupied(x, y) {
            return roll_back(piece, y);
        }
        if x >= width {
            piece.x -= 1;
            return Outcome::Blocked;
        }
        if x < 0 {
            piece.x += 1;
            return Outcome::Blocked;
        }
        if y >= floor {
            return Outcome::Settle;
        }
    }

    Outcome::Valid
}

/// Undo the move recorded in `piece.intent` after hitting an occupied cell at row `hit_y`.
fn roll_back(piece: &mut ActivePiece, hit_y: i8) -> Outcome {
    match piece.intent {
        Intent::Down => {
            if hit_y == 0 {
                return Outcome::GameOver;
            }
            piece.y -= 1;
            return Outcome::Settle;
        }
        Intent::Left => piece.x += 1,
        Intent::Right => piece.x -= 1,
        Intent::Rotate => piece.rotation = piece.rotation.rotate_ccw(),
        Intent::None => {}
    }
    Outcome::Blocked
}
