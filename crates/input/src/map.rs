//! Key mapping from terminal events to ladder buttons.

use crate::types::{AXIS_DOWN_MAX, AXIS_LEFT_MAX, AXIS_RIGHT_MAX, AXIS_ROTATE_MAX};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One button of the analog ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Right,
    Rotate,
    Down,
    Left,
}

impl Button {
    /// Axis reading the ladder produces while this button is down (band midpoint).
    pub fn axis_value(self) -> f32 {
        match self {
            Button::Right => AXIS_RIGHT_MAX / 2.0,
            Button::Rotate => (AXIS_RIGHT_MAX + AXIS_ROTATE_MAX) / 2.0,
            Button::Down => (AXIS_ROTATE_MAX + AXIS_DOWN_MAX) / 2.0,
            Button::Left => (AXIS_DOWN_MAX + AXIS_LEFT_MAX) / 2.0,
        }
    }
}

/// Map keyboard input to a ladder button.
pub fn button_for_key(key: KeyEvent) -> Option<Button> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Button::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Button::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Button::Down),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => Some(Button::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key requests a new game.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_tetris_core::controls::band;
    use matrix_tetris_types::Intent;

    #[test]
    fn test_movement_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Left)), Some(Button::Left));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Right)), Some(Button::Right));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Down)), Some(Button::Down));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('H'))), Some(Button::Left));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('d'))), Some(Button::Right));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('j'))), Some(Button::Down));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Up)), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('W'))), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char(' '))), Some(Button::Rotate));
        assert_eq!(button_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_axis_values_land_in_their_band() {
        assert_eq!(band(Button::Right.axis_value()), Intent::Right);
        assert_eq!(band(Button::Rotate.axis_value()), Intent::Rotate);
        assert_eq!(band(Button::Down.axis_value()), Intent::Down);
        assert_eq!(band(Button::Left.axis_value()), Intent::Left);
    }

    #[test]
    fn test_quit_and_restart_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!is_restart(KeyEvent::from(KeyCode::Char('q'))));
    }
}
