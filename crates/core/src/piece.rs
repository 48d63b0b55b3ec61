//! Active piece - the tetromino currently falling
//!
//! A pure coordinate holder: moves are applied unconditionally and recorded
//! in `intent`. Deciding whether a move stands is left to
//! [`crate::collision::resolve`].

use crate::pieces::{offsets_for, PieceShape};
use crate::types::{Intent, PieceKind, Rotation, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Movement that produced the current tentative position.
    pub intent: Intent,
}

impl ActivePiece {
    /// Spawn a piece above the board, horizontally centered
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x: (board_width / 2) as i8,
            y: SPAWN_Y,
            intent: Intent::Down,
        }
    }

    /// Create a piece at an explicit pivot, as if it had just moved down.
    pub fn at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
            intent: Intent::Down,
        }
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
        self.intent = Intent::Left;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
        self.intent = Intent::Right;
    }

    pub fn move_down(&mut self) {
        self.y += 1;
        self.intent = Intent::Down;
    }

    pub fn rotate_cw(&mut self) {
        self.rotation = self.rotation.rotate_cw();
        self.intent = Intent::Rotate;
    }

    /// Apply a sampled input intent. `Intent::None` leaves the piece untouched.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Down => self.move_down(),
            Intent::Left => self.move_left(),
            Intent::Right => self.move_right(),
            Intent::Rotate => self.rotate_cw(),
            Intent::None => {}
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        offsets_for(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos, in catalog order
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}
