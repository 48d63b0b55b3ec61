//! Analog button ladder decoding and debounce
//!
//! The controller reads one analog axis in `[0, 1]`; each button pulls it
//! into its own band. A single held counter shared by all buttons implements
//! the repeat policy:
//!
//! - rotate fires only on the first tick of a hold;
//! - left, right and down fire on the first tick, stay quiet while the
//!   counter is 1..=6, then fire on every following tick;
//! - releasing every button resets the counter to 0.

use crate::types::{
    Intent, AUTO_RELEASE_HELD, AXIS_DOWN_MAX, AXIS_LEFT_MAX, AXIS_RIGHT_MAX, AXIS_ROTATE_MAX,
    HOLD_REPEAT_TICKS,
};

/// Map an axis reading onto the button band it falls into.
pub fn band(axis: f32) -> Intent {
    if axis < AXIS_RIGHT_MAX {
        Intent::Right
    } else if axis < AXIS_ROTATE_MAX {
        Intent::Rotate
    } else if axis < AXIS_DOWN_MAX {
        Intent::Down
    } else if axis < AXIS_LEFT_MAX {
        Intent::Left
    } else {
        Intent::None
    }
}

/// Debounced analog controller.
#[derive(Debug, Clone, Default)]
pub struct AnalogController {
    held: i32,
}

impl AnalogController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of consecutive ticks a button has been down.
    pub fn held(&self) -> i32 {
        self.held
    }

    /// Decode one axis sample into the intent to apply this tick.
    pub fn sample(&mut self, axis: f32) -> Intent {
        let pressed = band(axis);
        let fire = match pressed {
            Intent::None => {
                self.held = 0;
                return Intent::None;
            }
            Intent::Rotate => self.held == 0,
            _ => self.held == 0 || self.held > HOLD_REPEAT_TICKS,
        };
        self.held = self.held.saturating_add(1);

        if fire {
            pressed
        } else {
            Intent::None
        }
    }

    /// Swallow the current hold until every button is released.
    pub fn auto_release(&mut self) {
        self.held = AUTO_RELEASE_HELD;
    }

    pub fn reset(&mut self) {
        self.held = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(band(0.0), Intent::Right);
        assert_eq!(band(0.019), Intent::Right);
        assert_eq!(band(0.02), Intent::Rotate);
        assert_eq!(band(0.19), Intent::Rotate);
        assert_eq!(band(0.2), Intent::Down);
        assert_eq!(band(0.49), Intent::Down);
        assert_eq!(band(0.5), Intent::Left);
        assert_eq!(band(0.69), Intent::Left);
        assert_eq!(band(0.7), Intent::None);
        assert_eq!(band(1.0), Intent::None);
    }

    #[test]
    fn test_directional_repeat_schedule() {
        let mut ctl = AnalogController::new();
        let fired: Vec<bool> = (0..10)
            .map(|_| ctl.sample(0.6) == Intent::Left)
            .collect();
        // fire, six quiet ticks, then every tick
        assert_eq!(
            fired,
            [true, false, false, false, false, false, false, true, true, true]
        );
    }

    #[test]
    fn test_rotate_fires_once_per_hold() {
        let mut ctl = AnalogController::new();
        assert_eq!(ctl.sample(0.1), Intent::Rotate);
        for _ in 0..20 {
            assert_eq!(ctl.sample(0.1), Intent::None);
        }
        assert_eq!(ctl.sample(1.0), Intent::None);
        assert_eq!(ctl.sample(0.1), Intent::Rotate);
    }

    #[test]
    fn test_release_resets_counter() {
        let mut ctl = AnalogController::new();
        ctl.sample(0.3);
        ctl.sample(0.3);
        assert_eq!(ctl.held(), 2);
        ctl.sample(0.9);
        assert_eq!(ctl.held(), 0);
        assert_eq!(ctl.sample(0.3), Intent::Down);
    }

    #[test]
    fn test_auto_release_latches_until_released() {
        let mut ctl = AnalogController::new();
        assert_eq!(ctl.sample(0.0), Intent::Right);
        ctl.auto_release();
        for _ in 0..50 {
            assert_eq!(ctl.sample(0.0), Intent::None);
        }
        assert!(ctl.held() < 0);

        ctl.sample(1.0);
        assert_eq!(ctl.sample(0.0), Intent::Right);
    }

    #[test]
    fn test_counter_is_shared_between_buttons() {
        let mut ctl = AnalogController::new();
        assert_eq!(ctl.sample(0.6), Intent::Left);
        // sliding straight onto another button does not count as a new press
        assert_eq!(ctl.sample(0.0), Intent::None);
        assert_eq!(ctl.sample(0.1), Intent::None);
    }
}
