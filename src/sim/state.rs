//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here. Construction is a pure
//! function of settings and seed, so a restart is just building a new state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::build_wall;
use crate::settings::Settings;
use crate::{Color, Point, Size};

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities built, scheduler not yet started
    Initializing,
    /// Ticks advance the ball
    Running,
    /// Run decided; the frozen scene stays up until the end screen is due
    Ending {
        outcome: Outcome,
        ticks_left: u32,
    },
    /// End screen shown, waiting for a click
    Terminated { outcome: Outcome },
}

impl GamePhase {
    /// Outcome once the run is decided
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            GamePhase::Ending { outcome, .. } | GamePhase::Terminated { outcome } => Some(outcome),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, GamePhase::Terminated { .. })
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ball reached the top wall with no bricks left
    Win,
    /// Ball reached the bottom wall
    Loss,
}

impl Outcome {
    /// Message shown on the end screen
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Loss => "Game over",
        }
    }
}

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Side,
}

/// Things that happened during a tick, drained by the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { wall: Wall, angle: f32 },
    BlockDestroyed { row: usize, pos: Point },
    PaddleHit { angle: f32 },
    Ended { outcome: Outcome },
    EndScreenShown { outcome: Outcome },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Point,
    /// Heading in radians (0 = +x, π/2 = down the screen)
    pub angle: f32,
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Point, angle: f32, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            angle,
            radius,
            speed,
            color: Color::WHITE,
        }
    }
}

/// An axis-aligned block: a brick or the paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub pos: Point,
    pub size: Size,
    pub color: Color,
    /// Drawn inset on the leading edges
    pub gap: f32,
}

impl Block {
    pub fn new(pos: Point, size: Size, color: Color, gap: f32) -> Self {
        Self {
            pos,
            size,
            color,
            gap,
        }
    }

    pub fn center(&self) -> Point {
        self.pos + self.size / 2.0
    }
}

/// Rows of bricks in brick-wall formation
pub type Grid = Vec<Vec<Block>>;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    /// Surviving bricks, row by row
    pub blocks: Grid,
    pub ball: Ball,
    pub paddle: Block,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub blocks_destroyed: u32,
    /// Events recorded since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh run; the ball heading is drawn from `[π/4, 3π/4)`
    pub fn new(settings: &Settings, seed: u64) -> Self {
        use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

        let mut rng = Pcg32::seed_from_u64(seed);
        let angle = rng.random::<f32>() * FRAC_PI_2 + FRAC_PI_4;

        let ball = Ball::new(
            settings.ball_spawn(),
            angle,
            settings.ball_radius,
            settings.ball_speed,
        );

        let paddle = Block::new(
            Point::new(
                settings.arena_width / 2.0 - settings.paddle_width / 2.0,
                settings.arena_height - settings.paddle_height - settings.block_gap,
            ),
            settings.paddle_size(),
            Color::PADDLE,
            settings.block_gap,
        );

        Self {
            seed,
            settings: settings.clone(),
            phase: GamePhase::Initializing,
            blocks: build_wall(settings),
            ball,
            paddle,
            time_ticks: 0,
            blocks_destroyed: 0,
            events: Vec::new(),
        }
    }

    /// Hand the state to the scheduler
    pub fn start(&mut self) {
        if self.phase == GamePhase::Initializing {
            self.phase = GamePhase::Running;
        }
    }

    /// Number of bricks still standing
    pub fn block_count(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Iterate over surviving bricks in row-major order
    pub fn bricks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().flatten()
    }

    /// Centre the paddle on a pointer x coordinate (arena space)
    pub fn move_paddle_to(&mut self, pointer_x: f32) {
        self.paddle.pos.x = pointer_x - self.paddle.size.x / 2.0;
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_new_state_layout() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 7);

        assert_eq!(state.phase, GamePhase::Initializing);
        assert_eq!(state.ball.pos, Point::new(450.0, 350.0));
        assert_eq!(state.paddle.pos, Point::new(410.0, 585.0));
        assert_eq!(state.paddle.size, Size::new(80.0, 13.0));
        assert_eq!(state.block_count(), 10 + 9 + 10 + 9);
    }

    #[test]
    fn test_initial_heading_range() {
        let settings = Settings::default();
        for seed in 0..200 {
            let state = GameState::new(&settings, seed);
            assert!(state.ball.angle >= FRAC_PI_4);
            assert!(state.ball.angle < 3.0 * PI / 4.0 + 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_heading() {
        let settings = Settings::default();
        let a = GameState::new(&settings, 42);
        let b = GameState::new(&settings, 42);
        assert_eq!(a.ball.angle, b.ball.angle);
    }

    #[test]
    fn test_unvalidated_zero_columns_builds_no_bricks() {
        let settings = Settings {
            columns: 0,
            ..Default::default()
        };
        let state = GameState::new(&settings, 1);
        assert_eq!(state.block_count(), 0);
        assert_eq!(state.blocks.len(), 4);
    }

    #[test]
    fn test_start_only_from_initializing() {
        let mut state = GameState::new(&Settings::default(), 1);
        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::Terminated {
            outcome: Outcome::Loss,
        };
        state.start();
        assert!(state.phase.is_terminated());
    }

    #[test]
    fn test_move_paddle_centres_on_pointer() {
        let mut state = GameState::new(&Settings::default(), 1);
        state.move_paddle_to(100.0);
        assert_eq!(state.paddle.pos.x, 60.0);
        assert_eq!(state.paddle.center().x, 100.0);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win.message(), "You win!");
        assert_eq!(Outcome::Loss.message(), "Game over");
    }
}
