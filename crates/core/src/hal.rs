//! Hardware seams consumed by the engine.
//!
//! The engine talks to its pixel surface, analog input and periodic timer
//! only through these traits. Hosts (LED matrix firmware, the terminal
//! front-end, tests) provide the implementations.

use std::collections::VecDeque;

use crate::types::Rgb;

/// Grid of colored pixels that is pushed to the display on `present`.
///
/// Colors arrive already scaled by the global brightness. Writes and reads
/// outside the surface are ignored and read back as black.
pub trait Surface {
    type Error;

    fn width(&self) -> u8;

    fn height(&self) -> u8;

    fn set_pixel(&mut self, x: i8, y: i8, color: Rgb);

    fn get_pixel(&self, x: i8, y: i8) -> Rgb;

    /// Set every pixel to black.
    fn clear(&mut self);

    /// Push the buffer to the display.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Draw a horizontal line across the whole surface.
    fn draw_row(&mut self, y: i8, color: Rgb) {
        for x in 0..self.width() as i8 {
            self.set_pixel(x, y, color);
        }
    }
}

/// Analog input device.
pub trait AxisInput {
    /// Current reading in `[0, 1]`.
    fn read_axis(&mut self) -> f32;
}

/// Which engine callback a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Main gravity / render tick.
    Frame,
    /// Line clear flash tick.
    Flash,
}

/// Opaque id of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u32);

/// Periodic timer primitive.
pub trait Scheduler {
    /// Fire `timer` every `interval_ms` until cancelled.
    fn schedule_repeating(&mut self, interval_ms: u32, timer: TimerKind) -> TimerHandle;

    /// Stop a timer. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Axis that replays a queue of readings, then rests at "no button" (1.0).
#[derive(Debug, Clone, Default)]
pub struct ScriptedAxis {
    readings: VecDeque<f32>,
}

impl ScriptedAxis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reading: f32) {
        self.readings.push_back(reading);
    }

    /// Queue the same reading for `ticks` samples.
    pub fn hold(&mut self, reading: f32, ticks: usize) {
        self.readings
            .extend(std::iter::repeat(reading).take(ticks));
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl AxisInput for ScriptedAxis {
    fn read_axis(&mut self) -> f32 {
        self.readings.pop_front().unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_axis_rests_when_empty() {
        let mut axis = ScriptedAxis::new();
        axis.push(0.1);
        axis.hold(0.6, 2);
        assert_eq!(axis.remaining(), 3);
        assert_eq!(axis.read_axis(), 0.1);
        assert_eq!(axis.read_axis(), 0.6);
        assert_eq!(axis.read_axis(), 0.6);
        assert_eq!(axis.read_axis(), 1.0);
    }
}
