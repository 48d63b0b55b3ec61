//! Line clear animation - flash a completed row, then collapse it
//!
//! One [`LineClear`] tracks one row. Each animation tick draws the row at the
//! current accumulator level and then raises the accumulator by a fixed step;
//! once it passes 1.0 the flash is over and the row can be collapsed.

/// Flash progress for the row currently being cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineClear {
    row: u8,
    accumulator: f32,
}

/// What to draw on one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashFrame {
    pub row: u8,
    /// Gray level to draw the row with, before brightness scaling.
    pub level: f32,
    /// The row goes black and collapses after this frame.
    pub finished: bool,
}

impl LineClear {
    pub fn new(row: u8) -> Self {
        Self {
            row,
            accumulator: 0.0,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Advance by one animation tick.
    pub fn advance(&mut self, step: f32) -> FlashFrame {
        let level = self.accumulator;
        self.accumulator += step;
        FlashFrame {
            row: self.row,
            level,
            finished: self.accumulator > 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FLASH_STEP;

    #[test]
    fn test_default_flash_runs_four_ticks() {
        let mut clear = LineClear::new(7);
        let frames: Vec<FlashFrame> = (0..4).map(|_| clear.advance(FLASH_STEP)).collect();

        assert!(frames[..3].iter().all(|f| !f.finished));
        assert!(frames[3].finished);
        assert_eq!(frames[0].level, 0.0);
        assert!(frames.windows(2).all(|w| w[1].level > w[0].level));
        assert!(frames.iter().all(|f| f.row == 7));
    }

    #[test]
    fn test_large_step_finishes_immediately() {
        let mut clear = LineClear::new(0);
        let frame = clear.advance(1.0);
        assert!(!frame.finished);
        assert!(clear.advance(1.0).finished);
    }
}
