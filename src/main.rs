//! Terminal LED-matrix Tetris runner (default binary).
//!
//! Drives the engine with wall-clock time: key events feed the emulated
//! analog axis, the interval scheduler fires frame and flash timers, and the
//! terminal matrix shows the pixels.

use std::cell::Cell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use matrix_tetris::core::{GameConfig, GameEngine, IntervalScheduler, Surface};
use matrix_tetris::input::{button_for_key, is_restart, should_quit, KeyboardAxis};
use matrix_tetris::term::TerminalMatrix;
use matrix_tetris::types::{
    DEFAULT_BRIGHTNESS, DEFAULT_FPS, DEFAULT_SPEED, MATRIX_HEIGHT, MATRIX_WIDTH,
};

/// Pause between game over and the automatic restart.
const RESTART_DELAY_MS: u64 = 1500;

/// Upper bound on a single input poll.
const MAX_POLL_MS: u64 = 100;

type TerminalGame = GameEngine<TerminalMatrix, KeyboardAxis, IntervalScheduler>;

#[derive(Parser, Debug)]
#[command(name = "matrix-tetris", version, about = "Tetris on an emulated LED pixel matrix")]
struct Args {
    /// Board width in pixels
    #[arg(long, default_value_t = MATRIX_WIDTH)]
    width: u8,

    /// Board height in pixels
    #[arg(long, default_value_t = MATRIX_HEIGHT)]
    height: u8,

    /// Frame timer rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Frames per gravity step
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: u32,

    /// LED brightness factor in (0, 1]
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS)]
    brightness: f32,

    /// Piece generator seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Display gain for LED colors (defaults to 1 / brightness)
    #[arg(long)]
    gain: Option<f32>,

    /// Stay on the blank screen after a game over until `r` is pressed
    #[arg(long)]
    no_auto_restart: bool,

    /// Append logs to this file (the terminal is in raw mode while playing)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            fps: self.fps,
            speed: self.speed,
            brightness: self.brightness,
            seed: self.seed.unwrap_or_else(clock_seed),
            ..GameConfig::default()
        }
    }

    fn display_gain(&self) -> f32 {
        self.gain.unwrap_or(1.0 / self.brightness)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.game_config();
    config.validate().context("invalid game configuration")?;
    info!(seed = config.seed, "configuration loaded");

    let display = TerminalMatrix::new(config.width, config.height, args.display_gain());
    let mut game = GameEngine::new(config, display, KeyboardAxis::new(), IntervalScheduler::new())
        .context("failed to build game engine")?;

    let ended = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ended);
    game.on_game_over(move |stats| {
        info!(
            games = stats.games_started,
            pieces = stats.pieces_settled,
            rows = stats.rows_cleared,
            "session totals"
        );
        flag.set(true);
    });

    game.display_mut().enter()?;
    let result = run(&mut game, &ended, !args.no_auto_restart);

    // Always try to restore terminal state.
    game.stop();
    let _ = game.display_mut().exit();
    result
}

fn run(game: &mut TerminalGame, ended: &Cell<bool>, auto_restart: bool) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    game.start()?;
    let mut restart_at: Option<u64> = None;

    loop {
        // Input with timeout until the next timer fire.
        let now = now_ms();
        let wait = game
            .scheduler()
            .next_due_ms()
            .map_or(MAX_POLL_MS, |due| due.saturating_sub(now))
            .min(MAX_POLL_MS);

        if event::poll(Duration::from_millis(wait))? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_restart(key) {
                            restart_at = None;
                            ended.set(false);
                            game.input_mut().reset();
                            game.start()?;
                        } else if let Some(button) = button_for_key(key) {
                            game.input_mut().press(button, now_ms());
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(button) = button_for_key(key) {
                            game.input_mut().release(button);
                        }
                    }
                },
                Event::Resize(_, _) => {
                    game.display_mut().invalidate();
                    game.display_mut().present()?;
                }
                _ => {}
            }
        }

        let now = now_ms();
        game.input_mut().set_clock(now);
        while let Some(timer) = game.scheduler_mut().advance_to(now) {
            game.on_timer(timer)?;
        }

        if ended.replace(false) && auto_restart {
            restart_at = Some(now + RESTART_DELAY_MS);
        }
        if restart_at.is_some_and(|at| now >= at) {
            restart_at = None;
            game.input_mut().reset();
            game.start()?;
        }
    }
}
