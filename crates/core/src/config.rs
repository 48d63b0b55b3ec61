//! Runtime game configuration.

use thiserror::Error;

use crate::types::{
    frame_interval_ms, DEFAULT_BRIGHTNESS, DEFAULT_FPS, DEFAULT_SPEED, FLASH_STEP, MATRIX_HEIGHT,
    MATRIX_WIDTH, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MIN_BOARD_SIDE,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "board must be between {min}x{min} and {max_w}x{max_h} cells, got {width}x{height}"
    )]
    Dimensions {
        width: u8,
        height: u8,
        min: u8,
        max_w: u8,
        max_h: u8,
    },
    #[error("fps must be between 1 and 1000, got {0}")]
    Fps(u32),
    #[error("speed must be at least 1 frame")]
    Speed,
    #[error("brightness must be in (0, 1], got {0}")]
    Brightness(f32),
    #[error("flash step must be in (0, 1], got {0}")]
    FlashStep(f32),
}

/// Options that shape a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Frame timer rate.
    pub fps: u32,
    /// Gravity moves the piece once every `speed` frames.
    pub speed: u32,
    /// Color scale for everything drawn.
    pub brightness: f32,
    /// Flash intensity increment per animation tick.
    pub flash_step: f32,
    /// Seed of the piece generator.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: MATRIX_WIDTH,
            height: MATRIX_HEIGHT,
            fps: DEFAULT_FPS,
            speed: DEFAULT_SPEED,
            brightness: DEFAULT_BRIGHTNESS,
            flash_step: FLASH_STEP,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Interval of both the frame and the flash timer.
    pub fn frame_interval_ms(&self) -> u32 {
        frame_interval_ms(self.fps)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let width_ok = (MIN_BOARD_SIDE..=MAX_BOARD_WIDTH).contains(&self.width);
        let height_ok = (MIN_BOARD_SIDE..=MAX_BOARD_HEIGHT).contains(&self.height);
        if !width_ok || !height_ok {
            return Err(ConfigError::Dimensions {
                width: self.width,
                height: self.height,
                min: MIN_BOARD_SIDE,
                max_w: MAX_BOARD_WIDTH,
                max_h: MAX_BOARD_HEIGHT,
            });
        }
        if self.fps == 0 || self.fps > 1000 {
            return Err(ConfigError::Fps(self.fps));
        }
        if self.speed == 0 {
            return Err(ConfigError::Speed);
        }
        if !(self.brightness > 0.0 && self.brightness <= 1.0) {
            return Err(ConfigError::Brightness(self.brightness));
        }
        if !(self.flash_step > 0.0 && self.flash_step <= 1.0) {
            return Err(ConfigError::FlashStep(self.flash_step));
        }
        Ok(())
    }
}
