//! Game engine - owns the whole game and drives it from timer fires
//!
//! `GameEngine` aggregates the board, the active piece, the explicit
//! [`GameState`], the input controller and the three hardware collaborators.
//! Hosts deliver timer fires through [`GameEngine::on_timer`]; the engine is
//! the only code that schedules or cancels timers, and it always cancels the
//! current timer before arming the next, so the frame timer and the flash
//! timer never run at the same time.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::collision::{resolve, Outcome};
use crate::config::{ConfigError, GameConfig};
use crate::controls::AnalogController;
use crate::hal::{AxisInput, Scheduler, Surface, TimerHandle, TimerKind};
use crate::line_clear::LineClear;
use crate::piece::ActivePiece;
use crate::pieces::{catalog_is_well_formed, color_for};
use crate::rng::SimpleRng;
use crate::types::{Intent, PieceKind, Rgb};

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    /// Normal play: the frame timer applies input and gravity.
    Falling,
    /// A completed row is flashing; gravity is suspended.
    LineClearing(LineClear),
    /// Terminal until `start` is called again.
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Falling => "falling",
            GameState::LineClearing(_) => "line_clearing",
            GameState::GameOver => "game_over",
        }
    }
}

/// In-memory session counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub games_started: u32,
    pub pieces_settled: u32,
    pub rows_cleared: u32,
}

type GameOverHook = Box<dyn FnMut(&GameStats)>;

pub struct GameEngine<D, A, S> {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    state: GameState,
    controls: AnalogController,
    rng: SimpleRng,
    /// Frame counter, 1..=fps.
    frame: u32,
    /// The one timer currently armed, if any.
    timer: Option<(TimerKind, TimerHandle)>,
    stats: GameStats,
    display: D,
    input: A,
    scheduler: S,
    game_over_hook: Option<GameOverHook>,
}

impl<D, A, S> GameEngine<D, A, S>
where
    D: Surface,
    A: AxisInput,
    S: Scheduler,
{
    /// Build an engine in the `Falling` state with one piece spawned.
    ///
    /// No timer is armed until [`GameEngine::start`].
    pub fn new(
        config: GameConfig,
        display: D,
        input: A,
        scheduler: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        assert!(catalog_is_well_formed(), "piece catalog is malformed");

        let board = Board::new(config.width, config.height).with_brightness(config.brightness);
        let mut rng = SimpleRng::new(config.seed);
        let active = ActivePiece::spawn(rng.next_piece(), config.width);

        Ok(Self {
            config,
            board,
            active,
            state: GameState::Falling,
            controls: AnalogController::new(),
            rng,
            frame: 1,
            timer: None,
            stats: GameStats::default(),
            display,
            input,
            scheduler,
            game_over_hook: None,
        })
    }

    /// Start a fresh game: clear board and display, spawn, arm the frame timer.
    pub fn start(&mut self) -> Result<(), D::Error> {
        self.stop_timer();
        self.board.reset();
        self.controls.reset();
        self.frame = 1;
        self.state = GameState::Falling;
        self.spawn_next();
        self.stats.games_started = self.stats.games_started.wrapping_add(1);

        self.display.clear();
        self.display.present()?;
        self.start_timer(TimerKind::Frame);

        info!(
            game = self.stats.games_started,
            width = self.config.width,
            height = self.config.height,
            fps = self.config.fps,
            "game started"
        );
        Ok(())
    }

    /// Restart after a game over (or at any time).
    pub fn reset(&mut self) -> Result<(), D::Error> {
        self.start()
    }

    /// Cancel whatever timer is armed. The game state is left untouched.
    pub fn stop(&mut self) {
        self.stop_timer();
    }

    /// Register a callback fired when the game ends.
    pub fn on_game_over(&mut self, hook: impl FnMut(&GameStats) + 'static) {
        self.game_over_hook = Some(Box::new(hook));
    }

    /// Deliver a timer fire from the scheduler.
    ///
    /// Fires of a timer the engine no longer holds are ignored.
    pub fn on_timer(&mut self, timer: TimerKind) -> Result<(), D::Error> {
        if self.active_timer() != Some(timer) {
            trace!(?timer, "ignoring stale timer fire");
            return Ok(());
        }
        match timer {
            TimerKind::Frame => self.tick().map(|_| ()),
            TimerKind::Flash => self.flash_tick(),
        }
    }

    /// Run one frame of normal play.
    ///
    /// Returns the collision outcome, or `None` outside the `Falling` state.
    pub fn tick(&mut self) -> Result<Option<Outcome>, D::Error> {
        if self.state != GameState::Falling {
            return Ok(None);
        }

        let intent = self.controls.sample(self.input.read_axis());
        if intent == Intent::None {
            // A held button suspends gravity, even on debounced samples.
            if self.controls.held() <= 0 && self.frame % self.config.speed == 0 {
                self.active.move_down();
            }
        } else {
            self.active.apply(intent);
        }

        let outcome = resolve(&mut self.active, &self.board);
        match outcome {
            Outcome::Valid => {}
            Outcome::Blocked => self.controls.auto_release(),
            Outcome::Settle => {
                self.controls.auto_release();
                self.settle();
            }
            Outcome::GameOver => {
                self.game_over()?;
                return Ok(Some(outcome));
            }
        }

        self.render()?;

        self.frame += 1;
        if self.frame > self.config.fps {
            self.frame = 1;
        }
        Ok(Some(outcome))
    }

    /// Commit the active piece, spawn its successor, and look for full rows.
    fn settle(&mut self) {
        self.board.commit(&self.active);
        self.stats.pieces_settled = self.stats.pieces_settled.wrapping_add(1);
        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            rotation = self.active.rotation.index(),
            "piece settled"
        );

        self.spawn_next();
        self.begin_next_line_clear();
    }

    /// Switch to `LineClearing` for the lowest-index completed row, if any.
    fn begin_next_line_clear(&mut self) {
        let Some(&row) = self.board.scan_completed_rows().first() else {
            return;
        };
        self.stop_timer();
        self.state = GameState::LineClearing(LineClear::new(row));
        self.start_timer(TimerKind::Flash);
        debug!(row, "line clear started");
    }

    /// One animation tick of the row flash; collapses the row when done.
    fn flash_tick(&mut self) -> Result<(), D::Error> {
        let GameState::LineClearing(ref mut clear) = self.state else {
            return Ok(());
        };
        let frame = clear.advance(self.config.flash_step);
        let y = frame.row as i8;

        self.display
            .draw_row(y, Rgb::gray(frame.level).scaled(self.config.brightness));
        self.display.present()?;
        if !frame.finished {
            return Ok(());
        }

        self.display.draw_row(y, Rgb::BLACK);
        self.stop_timer();
        self.board.clear_row(frame.row);
        self.stats.rows_cleared = self.stats.rows_cleared.wrapping_add(1);
        self.state = GameState::Falling;
        self.start_timer(TimerKind::Frame);
        debug!(row = frame.row, total = self.stats.rows_cleared, "row cleared");

        self.begin_next_line_clear();
        self.render()
    }

    fn game_over(&mut self) -> Result<(), D::Error> {
        self.stop_timer();
        self.state = GameState::GameOver;
        info!(
            pieces_settled = self.stats.pieces_settled,
            rows_cleared = self.stats.rows_cleared,
            "game over"
        );
        if let Some(hook) = self.game_over_hook.as_mut() {
            hook(&self.stats);
        }

        self.display.clear();
        self.display.present()
    }

    /// Composite the settled board and the active piece, then present.
    fn render(&mut self) -> Result<(), D::Error> {
        self.display.clear();
        for y in 0..self.board.height() {
            for (x, cell) in self.board.row(y).iter().enumerate() {
                if let Some(color) = cell {
                    self.display.set_pixel(x as i8, y as i8, *color);
                }
            }
        }

        let color = color_for(self.active.kind).scaled(self.config.brightness);
        for (x, y) in self.active.cells() {
            self.display.set_pixel(x, y, color);
        }
        self.display.present()
    }

    fn spawn_next(&mut self) {
        let kind = self.rng.next_piece();
        self.spawn(kind);
    }

    /// Replace the active piece with a freshly spawned `kind`.
    pub fn spawn(&mut self, kind: PieceKind) {
        self.active = ActivePiece::spawn(kind, self.board.width());
    }

    fn start_timer(&mut self, timer: TimerKind) {
        debug_assert!(self.timer.is_none(), "frame and flash timers must not overlap");
        let handle = self
            .scheduler
            .schedule_repeating(self.config.frame_interval_ms(), timer);
        self.timer = Some((timer, handle));
    }

    fn stop_timer(&mut self) {
        if let Some((_, handle)) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn active_timer(&self) -> Option<TimerKind> {
        self.timer.map(|(timer, _)| timer)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    /// Place the active piece directly, for scripted setups.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn controls(&self) -> &AnalogController {
        &self.controls
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input_mut(&mut self) -> &mut A {
        &mut self.input
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
