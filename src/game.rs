//! Game controller
//!
//! Owns the simulation state and drives it at the configured tick rate.
//! Each tick draws the current scene and then advances it, so what is on
//! the surface always lags the simulation by exactly one step. Once the run
//! ends the scheduler stops and only a click (restart) is honoured.

use crate::platform::{FixedStep, InputQueue, InputSender};
use crate::renderer::{Surface, draw_end_screen, draw_scene};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// A running breakout game bound to one set of settings
#[derive(Debug)]
pub struct Game {
    settings: Settings,
    state: GameState,
    input: InputQueue,
    clock: FixedStep,
    autopilot: bool,
    /// Events produced by the most recent tick
    events: Vec<GameEvent>,
    runs: u32,
}

impl Game {
    /// Validate settings and start the first run
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut state = GameState::new(&settings, seed);
        state.start();
        log::info!(
            "Game started: seed {}, {} bricks, heading {:.3} rad",
            seed,
            state.block_count(),
            state.ball.angle
        );

        Ok(Self {
            clock: FixedStep::new(settings.tick_rate_hz),
            settings,
            state,
            input: InputQueue::new(),
            autopilot: false,
            events: Vec::new(),
            runs: 1,
        })
    }

    /// Handle for delivering pointer and click events
    pub fn input(&self) -> InputSender {
        self.input.sender()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of runs played so far, counting the current one
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Let the paddle follow the ball
    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
    }

    /// Whether the recurring scheduler should keep firing
    pub fn is_ticking(&self) -> bool {
        !self.state.phase.is_terminated()
    }

    /// One scheduled tick: apply input, draw, advance, resolve
    pub fn step(&mut self, surface: &mut dyn Surface) {
        if !self.is_ticking() {
            return;
        }

        let drained = self.input.drain();
        if drained.clicks > 0 {
            log::debug!("Ignoring {} click(s) while {:?}", drained.clicks, self.state.phase);
        }
        let input = TickInput {
            pointer_x: drained.pointer_x,
            autopilot: self.autopilot,
        };

        draw_scene(&self.state, surface);
        tick(&mut self.state, &input);

        self.events = self.state.drain_events();
        for event in &self.events {
            match *event {
                GameEvent::BlockDestroyed { row, pos } => {
                    log::debug!(
                        "Brick destroyed at ({:.1}, {:.1}) in row {}, {} left",
                        pos.x,
                        pos.y,
                        row,
                        self.state.block_count()
                    );
                }
                GameEvent::PaddleHit { angle } => log::debug!("Paddle hit, heading {:.3}", angle),
                GameEvent::WallBounce { wall, angle } => {
                    log::trace!("{:?} wall bounce, heading {:.3}", wall, angle)
                }
                GameEvent::Ended { outcome } => log::info!(
                    "Run over after {} ticks: {}",
                    self.state.time_ticks,
                    outcome.message()
                ),
                GameEvent::EndScreenShown { outcome } => {
                    draw_end_screen(outcome, &self.settings, surface);
                    log::info!("End screen shown, waiting for click");
                }
            }
        }
    }

    /// Feed elapsed wall time; runs every tick that is due and returns the count
    pub fn frame(&mut self, dt: f32, surface: &mut dyn Surface) -> u32 {
        let due = self.clock.advance(dt);
        let mut ran = 0;
        for _ in 0..due {
            if !self.is_ticking() {
                break;
            }
            self.step(surface);
            ran += 1;
        }
        if !self.is_ticking() {
            self.poll_restart();
        }
        ran
    }

    /// After the end screen, restart on a click; returns true if restarted
    pub fn poll_restart(&mut self) -> bool {
        if self.is_ticking() {
            return false;
        }
        if self.input.drain().clicks == 0 {
            return false;
        }
        self.restart(self.state.seed.wrapping_add(1));
        true
    }

    /// Throw away the current run and build a fresh one from settings
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(&self.settings, seed);
        self.state.start();
        self.clock.reset();
        self.events.clear();
        self.runs += 1;
        log::info!("Game restarted with seed: {}", seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::Outcome;
    use crate::Point;
    use std::f32::consts::FRAC_PI_2;

    /// Ball falling straight down, paddle out of the way
    fn doomed_game() -> Game {
        let mut game = Game::new(Settings::default(), 9).unwrap();
        game.state_mut().blocks.clear();
        game.state_mut().ball.angle = FRAC_PI_2;
        game.input().pointer_moved(100.0);
        game
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            Game::new(settings, 1),
            Err(SettingsError::EmptyGrid)
        ));
    }

    #[test]
    fn test_step_draws_before_moving() {
        let mut game = Game::new(Settings::default(), 2).unwrap();
        let before = game.state().ball.pos;
        let mut surface = RecordingSurface::default();
        game.step(&mut surface);

        let drawn = surface.commands.iter().find_map(|c| match c {
            DrawCommand::FillCircle { center, .. } => Some(*center),
            _ => None,
        });
        assert_eq!(drawn, Some(before));
        assert_ne!(game.state().ball.pos, before);
    }

    #[test]
    fn test_pointer_applied_at_tick() {
        let mut game = Game::new(Settings::default(), 2).unwrap();
        game.input().pointer_moved(200.0);
        assert_eq!(game.state().paddle.pos.x, 410.0);
        game.step(&mut RecordingSurface::default());
        assert_eq!(game.state().paddle.pos.x, 160.0);
    }

    #[test]
    fn test_loss_then_end_screen_then_restart() {
        let mut game = doomed_game();
        let mut surface = RecordingSurface::default();

        let mut ticks = 0;
        while game.is_ticking() && ticks < 500 {
            game.step(&mut surface);
            ticks += 1;
        }
        // 41 ticks to fall plus 60 ticks of delay
        assert_eq!(ticks, 41 + 60);
        assert_eq!(
            game.phase(),
            GamePhase::Terminated {
                outcome: Outcome::Loss
            }
        );
        assert_eq!(surface.texts(), vec!["Game over", "Click to play again"]);
        assert_eq!(surface.rect_count(), 0);

        // Stopped: stepping does nothing
        game.step(&mut surface);
        assert!(!game.is_ticking());

        assert!(!game.poll_restart());
        game.input().click();
        assert!(game.poll_restart());
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.runs(), 2);
        assert_eq!(game.state().block_count(), 38);
        assert_eq!(game.state().ball.pos, Point::new(450.0, 350.0));
    }

    #[test]
    fn test_clicks_ignored_while_running() {
        let mut game = Game::new(Settings::default(), 4).unwrap();
        game.input().click();
        game.step(&mut RecordingSurface::default());
        assert!(!game.poll_restart());
        assert_eq!(game.runs(), 1);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_frame_runs_due_ticks() {
        let mut game = Game::new(Settings::default(), 4).unwrap();
        let mut surface = RecordingSurface::default();
        assert_eq!(game.frame(1.0 / 30.0, &mut surface), 2);
        assert_eq!(game.state().time_ticks, 2);
    }
}
