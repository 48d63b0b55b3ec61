//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the engine, the terminal host, and tests alike.
//!
//! # Matrix Dimensions
//!
//! The default playfield matches a 16x8 LED matrix:
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 8 rows (indexed 0-7, row 0 at the top)
//! - **Spawn position**: pivot at `(width / 2, -2)`, above the visible area
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 30 | Frame timer rate (interval = 1000 / fps ms) |
//! | `DEFAULT_SPEED` | 15 | Gravity applies when `frame % speed == 0` |
//! | `FLASH_STEP` | 0.3 | Flash intensity increment per animation tick |
//! | `HOLD_REPEAT_TICKS` | 6 | Held ticks before a directional move repeats |
//!
//! # Examples
//!
//! ```
//! use matrix_tetris_types::{Intent, PieceKind, Rotation, MATRIX_HEIGHT, MATRIX_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::R3.rotate_cw(), Rotation::R0);
//! assert_eq!(Intent::Left.as_str(), "left");
//!
//! assert_eq!(MATRIX_WIDTH, 16);
//! assert_eq!(MATRIX_HEIGHT, 8);
//! ```

/// Board width in cells (16 columns)
pub const MATRIX_WIDTH: u8 = 16;

/// Board height in cells (8 rows)
pub const MATRIX_HEIGHT: u8 = 8;

/// Largest accepted board width.
pub const MAX_BOARD_WIDTH: u8 = 64;

/// Largest accepted board height.
pub const MAX_BOARD_HEIGHT: u8 = 32;

/// Smallest accepted board side (a piece spans four cells).
pub const MIN_BOARD_SIDE: u8 = 4;

/// Frames per second of the main tick.
pub const DEFAULT_FPS: u32 = 30;

/// Gravity moves the piece every `DEFAULT_SPEED` frames.
pub const DEFAULT_SPEED: u32 = 15;

/// Global color scale applied to every lit pixel (1.0 = 100%).
pub const DEFAULT_BRIGHTNESS: f32 = 0.02;

/// Flash intensity added per animation tick while a row is being cleared.
pub const FLASH_STEP: f32 = 0.3;

/// Directional moves repeat once the held counter exceeds this value.
pub const HOLD_REPEAT_TICKS: i32 = 6;

/// Held counter forced after a blocked or settled move.
///
/// The counter keeps growing from here while the button stays down, so the
/// press cannot fire again until it is released.
pub const AUTO_RELEASE_HELD: i32 = -9999;

/// Spawn row of a new piece's pivot.
pub const SPAWN_Y: i8 = -2;

/// Upper bounds (exclusive) of the analog input bands.
///
/// `[0, 0.02)` right, `[0.02, 0.2)` rotate, `[0.2, 0.5)` down, `[0.5, 0.7)` left,
/// `[0.7, 1.0]` no button.
pub const AXIS_RIGHT_MAX: f32 = 0.02;
pub const AXIS_ROTATE_MAX: f32 = 0.2;
pub const AXIS_DOWN_MAX: f32 = 0.5;
pub const AXIS_LEFT_MAX: f32 = 0.7;

/// Compute the frame timer interval for a frame rate.
pub const fn frame_interval_ms(fps: u32) -> u32 {
    1000 / fps
}


/// The seven tetromino piece kinds
///
/// Each piece has a fixed display color:
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (the skew piece, mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`], used to index catalog tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// `"2"` is accepted as the skew piece's legacy name.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("2"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" | "2" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation state index, 0 through 3 clockwise from spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Build a rotation from any index, taken modulo 4.
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::R0,
            1 => Rotation::R1,
            2 => Rotation::R2,
            _ => Rotation::R3,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rotate clockwise (+1 mod 4)
    pub const fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-1 mod 4)
    pub const fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

/// Movement that produced the active piece's current tentative position.
///
/// Also the result of sampling the analog input; `None` means no button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    Down,
    Left,
    Right,
    Rotate,
    #[default]
    None,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Down => "down",
            Intent::Left => "left",
            Intent::Right => "right",
            Intent::Rotate => "rotate",
            Intent::None => "none",
        }
    }
}

/// RGB color with floating point channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Gray with all channels at `level`.
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    /// Multiply every channel by `factor`.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn is_black(&self) -> bool {
        self.r <= 0.0 && self.g <= 0.0 && self.b <= 0.0
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Occupied, holding the brightness-scaled color it was committed with
pub type Cell = Option<Rgb>;
