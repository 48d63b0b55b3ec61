//! Pieces module - tetromino shapes, rotation tables, and colors
//!
//! Every kind has four rotation states of exactly four `(dx, dy)` offsets
//! relative to the pivot. Offsets are listed in catalog order: collision checks
//! walk them front to back and stop at the first offending cell, so the order
//! is part of the game rules.

use crate::types::{PieceKind, Rgb, Rotation};

/// Offset of a single mino relative to the piece pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

/// Rotation table of one kind, indexed by rotation index
type RotationTable = [PieceShape; 4];

/// Shapes indexed by [`PieceKind::index`].
const SHAPES: [RotationTable; 7] = [
    // I
    [
        [(0, 0), (-1, 0), (-2, 0), (1, 0)],
        [(0, 0), (0, -1), (0, 1), (0, 2)],
        [(0, 1), (1, 1), (-1, 1), (-2, 1)],
        [(-1, 0), (-1, -1), (-1, 1), (-1, 2)],
    ],
    // J
    [
        [(0, 0), (-1, 0), (1, 0), (-1, -1)],
        [(0, 0), (0, -1), (1, -1), (0, 1)],
        [(0, 0), (-1, 0), (1, 0), (1, 1)],
        [(0, 0), (0, -1), (0, 1), (-1, 1)],
    ],
    // L
    [
        [(0, 0), (-1, 0), (1, 0), (1, -1)],
        [(0, 0), (0, -1), (0, 1), (1, 1)],
        [(0, 0), (-1, 0), (-1, 1), (1, 0)],
        [(0, 0), (0, -1), (-1, -1), (0, 1)],
    ],
    // O
    [
        [(0, 0), (-1, 0), (-1, 1), (0, 1)],
        [(0, 0), (-1, 0), (-1, 1), (0, 1)],
        [(0, 0), (-1, 0), (-1, 1), (0, 1)],
        [(0, 0), (-1, 0), (-1, 1), (0, 1)],
    ],
    // S
    [
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
        [(0, 0), (0, -1), (1, 0), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (-1, 1)],
        [(0, 0), (-1, 0), (-1, -1), (0, 1)],
    ],
    // T
    [
        [(0, 0), (0, -1), (-1, 0), (1, 0)],
        [(0, 0), (0, -1), (0, 1), (1, 0)],
        [(0, 0), (-1, 0), (1, 0), (0, 1)],
        [(0, 0), (-1, 0), (0, -1), (0, 1)],
    ],
    // Z
    [
        [(0, 0), (0, -1), (-1, -1), (1, 0)],
        [(0, 0), (0, 1), (1, 0), (1, -1)],
        [(0, 0), (-1, 0), (0, 1), (1, 1)],
        [(0, 0), (0, -1), (-1, 0), (-1, 1)],
    ],
];

/// Display colors indexed by [`PieceKind::index`], before brightness scaling.
const COLORS: [Rgb; 7] = [
    Rgb::new(0.0, 1.0, 1.0),
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(1.0, 0.66, 0.0),
    Rgb::new(1.0, 1.0, 0.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(0.6, 0.0, 1.0),
    Rgb::new(1.0, 0.0, 0.0),
];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn offsets_for(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index() as usize]
}

/// Get the unscaled display color of a piece kind
pub fn color_for(kind: PieceKind) -> Rgb {
    COLORS[kind.index()]
}

/// Check that every rotation of every kind lists four distinct offsets.
pub fn catalog_is_well_formed() -> bool {
    SHAPES.iter().flatten().all(|shape| {
        shape
            .iter()
            .enumerate()
            .all(|(i, a)| shape[i + 1..].iter().all(|b| a != b))
    })
}
