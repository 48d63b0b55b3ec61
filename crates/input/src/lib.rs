//! Terminal input module (engine-facing).
//!
//! The game reads a single analog axis wired to a resistor button ladder.
//! This crate emulates that axis from a keyboard: [`map`] turns `crossterm`
//! key events into ladder buttons and [`KeyboardAxis`] reports the held
//! button's voltage band, releasing it after a timeout on terminals that never
//! send key-release events.

pub mod axis;
pub mod map;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use axis::KeyboardAxis;
pub use map::{button_for_key, is_restart, should_quit, Button};
