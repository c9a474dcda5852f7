//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (row-major over the brick wall)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{bounce_angle, is_touching, reflect_horizontal, reflect_vertical};
pub use grid::build_wall;
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Grid, Outcome, Wall};
pub use tick::{TickInput, tick};
