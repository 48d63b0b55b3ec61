//! Matrix Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `matrix_tetris::{core,input,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub use matrix_tetris_core as core;
pub use matrix_tetris_input as input;
pub use matrix_tetris_term as term;
pub use matrix_tetris_types as types;
