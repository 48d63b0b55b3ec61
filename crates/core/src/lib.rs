//! Core game logic - deterministic and testable
//!
//! This crate contains the game rules and the tick-driven state machine. It
//! never touches real hardware: the pixel surface, the analog input and the
//! periodic timer are consumed through the traits in [`hal`], so the same
//! engine runs on an LED matrix, in a terminal, or headless in tests.
//!
//! # Module Structure
//!
//! - [`pieces`]: tetromino offsets for 4 rotation states and piece colors
//! - [`piece`]: the active falling piece (coordinates + last movement intent)
//! - [`board`]: settled cells, completed row detection and row collapse
//! - [`collision`]: per-tick validation with intent-specific rollback
//! - [`line_clear`]: flash progress of the row being cleared
//! - [`controls`]: analog band decoding and held-button debounce
//! - [`engine`]: the `GameEngine` aggregate and its state machine
//! - [`hal`], [`scheduler`], [`surface`]: collaborator traits and in-memory implementations
//!
//! # Game Rules
//!
//! - A new piece spawns centered above the board and falls one row every
//!   `speed` frames unless a button is pressed that frame.
//! - Colliding while moving down settles the piece; doing so at row 0 ends the game.
//! - Completed rows are flashed and collapsed one at a time, lowest index first,
//!   while gravity is suspended.
//!
//! # Example
//!
//! ```
//! use matrix_tetris_core::{
//!     GameConfig, GameEngine, GameState, IntervalScheduler, PixelBuffer, ScriptedAxis, TimerKind,
//! };
//!
//! let config = GameConfig::default();
//! let display = PixelBuffer::new(config.width, config.height);
//! let mut game =
//!     GameEngine::new(config, display, ScriptedAxis::new(), IntervalScheduler::new()).unwrap();
//! game.start().unwrap();
//!
//! // Drive one second of play with synthetic time.
//! for now in 0..=1000 {
//!     while let Some(timer) = game.scheduler_mut().advance_to(now) {
//!         game.on_timer(timer).unwrap();
//!     }
//! }
//! assert_eq!(game.state(), GameState::Falling);
//! assert_eq!(game.active_timer(), Some(TimerKind::Frame));
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod controls;
pub mod engine;
pub mod hal;
pub mod line_clear;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod surface;

pub use matrix_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{resolve, Outcome};
pub use config::{ConfigError, GameConfig};
pub use controls::AnalogController;
pub use engine::{GameEngine, GameState, GameStats};
pub use hal::{AxisInput, Scheduler, ScriptedAxis, Surface, TimerHandle, TimerKind};
pub use line_clear::{FlashFrame, LineClear};
pub use piece::ActivePiece;
pub use pieces::{color_for, offsets_for};
pub use rng::SimpleRng;
pub use scheduler::IntervalScheduler;
pub use surface::PixelBuffer;
