//! Platform abstraction layer
//!
//! Handles the host-facing side of the game:
//! - Input events (pointer moves and clicks from any thread)
//! - Time/ticks (fixed-rate stepping from variable frame times)

pub mod input;
pub mod time;

pub use input::{DrainedInput, InputEvent, InputQueue, InputSender};
pub use time::{FixedStep, MAX_SUBSTEPS};
