//! Piece catalog tests

use matrix_tetris::core::{color_for, offsets_for, ActivePiece};
use matrix_tetris::types::{PieceKind, Rotation, SPAWN_Y};

#[test]
fn test_every_rotation_has_four_distinct_offsets() {
    for kind in PieceKind::ALL {
        for r in 0..4 {
            let shape = offsets_for(kind, Rotation::from_index(r));
            assert_eq!(shape.len(), 4);
            for (i, a) in shape.iter().enumerate() {
                for b in &shape[i + 1..] {
                    assert_ne!(a, b, "{} rotation {} repeats an offset", kind.as_str(), r);
                }
            }
        }
    }
}

#[test]
fn test_four_rotations_return_to_spawn_shape() {
    for kind in PieceKind::ALL {
        let mut piece = ActivePiece::spawn(kind, 16);
        let start = piece.shape();
        for _ in 0..4 {
            piece.rotate_cw();
        }
        assert_eq!(piece.rotation, Rotation::R0);
        assert_eq!(piece.shape(), start);
    }
}

#[test]
fn test_spawn_is_centered_above_board() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind, 16);
        assert_eq!((piece.x, piece.y), (8, SPAWN_Y));
        assert_eq!(piece.rotation, Rotation::R0);
    }
    // odd widths round down
    assert_eq!(ActivePiece::spawn(PieceKind::I, 9).x, 4);
}

#[test]
fn test_spawned_cells_sit_above_the_grid_or_on_it() {
    // Every spawn shape must fit horizontally on the narrowest board.
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind, 4);
        for (x, y) in piece.cells() {
            assert!((0..4).contains(&x), "{} spawns outside the walls", kind.as_str());
            assert!(y < 0);
        }
    }
}

#[test]
fn test_colors_are_unscaled_and_lit() {
    for kind in PieceKind::ALL {
        let c = color_for(kind);
        assert!(!c.is_black());
        for ch in [c.r, c.g, c.b] {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
}
