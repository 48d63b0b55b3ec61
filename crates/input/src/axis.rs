//! Keyboard-driven analog axis for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! terminals repeat press events while a key is held, and each one refreshes
//! the hold. A release (real or timed out) only takes effect once the engine
//! has sampled the press, so a quick tap between two frames is never lost.

use crate::core::AxisInput;
use crate::map::Button;

/// In terminals without key-release events, a short timeout prevents a single tap
/// from turning into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Reading of the ladder with no button down.
const AXIS_IDLE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct KeyboardAxis {
    held: Option<Button>,
    /// The current hold was read at least once.
    sampled: bool,
    release_pending: bool,
    last_key_ms: u64,
    now_ms: u64,
    key_release_timeout_ms: u64,
}

impl KeyboardAxis {
    pub fn new() -> Self {
        Self {
            held: None,
            sampled: false,
            release_pending: false,
            last_key_ms: 0,
            now_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<Button> {
        self.held
    }

    /// Advance the host clock used for the release timeout.
    pub fn set_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Press (or keep pressing) a button.
    pub fn press(&mut self, button: Button, now_ms: u64) {
        self.set_clock(now_ms);
        self.last_key_ms = self.now_ms;
        self.release_pending = false;
        if self.held != Some(button) {
            self.held = Some(button);
            self.sampled = false;
        }
    }

    /// Release a button; ignored if another button is held.
    pub fn release(&mut self, button: Button) {
        if self.held == Some(button) {
            self.release_pending = true;
        }
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.sampled = false;
        self.release_pending = false;
    }

    fn timed_out(&self) -> bool {
        self.now_ms.saturating_sub(self.last_key_ms) > self.key_release_timeout_ms
    }
}

impl Default for KeyboardAxis {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisInput for KeyboardAxis {
    fn read_axis(&mut self) -> f32 {
        let Some(button) = self.held else {
            return AXIS_IDLE;
        };
        if self.sampled && (self.release_pending || self.timed_out()) {
            self.reset();
            return AXIS_IDLE;
        }
        self.sampled = true;
        button.axis_value()
    }
}
