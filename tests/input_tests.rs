//! Keyboard input tests - keys driving the engine through the emulated axis

use crossterm::event::{KeyCode, KeyEvent};

use matrix_tetris::core::{ActivePiece, GameConfig, GameEngine, IntervalScheduler, PixelBuffer};
use matrix_tetris::input::{button_for_key, Button, KeyboardAxis};
use matrix_tetris::types::{PieceKind, Rotation};

type KeyGame = GameEngine<PixelBuffer, KeyboardAxis, IntervalScheduler>;

fn key_game() -> KeyGame {
    let config = GameConfig::default();
    let display = PixelBuffer::new(config.width, config.height);
    GameEngine::new(config, display, KeyboardAxis::new(), IntervalScheduler::new()).unwrap()
}

fn press(game: &mut KeyGame, code: KeyCode, now_ms: u64) {
    let button = button_for_key(KeyEvent::from(code)).expect("mapped key");
    game.input_mut().press(button, now_ms);
}

#[test]
fn test_arrow_tap_moves_piece_once() {
    let mut game = key_game();
    game.set_active(ActivePiece::at(PieceKind::O, Rotation::R0, 8, 2));

    press(&mut game, KeyCode::Left, 0);
    game.input_mut().release(Button::Left);
    game.tick().unwrap();
    game.tick().unwrap();
    assert_eq!(game.active().x, 7);
}

#[test]
fn test_up_rotates_once_per_press() {
    let mut game = key_game();
    game.set_active(ActivePiece::at(PieceKind::T, Rotation::R0, 8, 3));

    // key repeat keeps the hold alive
    for now in [0, 30, 60, 90] {
        press(&mut game, KeyCode::Up, now);
        game.input_mut().set_clock(now + 5);
        game.tick().unwrap();
    }
    assert_eq!(game.active().rotation, Rotation::R1);
}

#[test]
fn test_hold_times_out_without_release_event() {
    let mut game = key_game();
    game.set_active(ActivePiece::at(PieceKind::O, Rotation::R0, 8, 2));

    press(&mut game, KeyCode::Char('d'), 0);
    game.tick().unwrap();
    assert_eq!(game.active().x, 9);

    // no repeats arrive: the button lets go after the timeout
    game.input_mut().set_clock(1000);
    game.tick().unwrap();
    assert_eq!(game.input_mut().held(), None);
    assert_eq!(game.controls().held(), 0);
}
