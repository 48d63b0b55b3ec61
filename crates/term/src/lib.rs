//! Terminal "LED matrix" module.
//!
//! Emulates the pixel matrix the game was built for: each pixel becomes a
//! two-column block whose color is the LED color times a display gain (LED
//! colors are dimmed by the brightness factor and would be near-black
//! otherwise).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only the pixels that changed since the last present
//! - Keep the pixel grid roughly square (2 chars wide per pixel)

pub mod matrix;
pub mod renderer;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use matrix::TerminalMatrix;
pub use renderer::{encode_diff_into, encode_full_into, to_rgb8, TerminalRenderer};
