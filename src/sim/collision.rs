//! Collision tests and bounce rules
//!
//! The ball is treated as its bounding square when testing against blocks,
//! and a block sends the ball off along the line from its centre to the
//! ball. Neither is exact physics; gameplay depends on both as written.

use std::f32::consts::{PI, TAU};

use super::state::{Ball, Block};

/// Whether the ball's bounding square overlaps the block (edges inclusive)
pub fn is_touching(block: &Block, ball: &Ball) -> bool {
    ball.pos.x + ball.radius >= block.pos.x
        && ball.pos.x - ball.radius <= block.pos.x + block.size.x
        && ball.pos.y + ball.radius >= block.pos.y
        && ball.pos.y - ball.radius <= block.pos.y + block.size.y
}

/// New heading after the ball hits the block: from block centre to ball centre
pub fn bounce_angle(block: &Block, ball: &Ball) -> f32 {
    let center = block.center();
    (ball.pos.y - center.y).atan2(ball.pos.x - center.x)
}

impl Block {
    #[inline]
    pub fn is_touching(&self, ball: &Ball) -> bool {
        is_touching(self, ball)
    }

    #[inline]
    pub fn bounce_angle(&self, ball: &Ball) -> f32 {
        bounce_angle(self, ball)
    }
}

/// Ball has reached the bottom of the arena
#[inline]
pub fn hits_bottom(ball: &Ball, arena_height: f32) -> bool {
    ball.pos.y + ball.radius >= arena_height
}

/// Ball has reached the top of the arena
#[inline]
pub fn hits_top(ball: &Ball) -> bool {
    ball.pos.y - ball.radius <= 0.0
}

/// Ball has reached the left or right wall
#[inline]
pub fn hits_side(ball: &Ball, arena_width: f32) -> bool {
    ball.pos.x + ball.radius >= arena_width || ball.pos.x - ball.radius <= 0.0
}

/// Mirror a heading across the horizontal axis (top/bottom walls)
#[inline]
pub fn reflect_vertical(angle: f32) -> f32 {
    TAU - angle
}

/// Mirror a heading across the vertical axis (side walls)
#[inline]
pub fn reflect_horizontal(angle: f32) -> f32 {
    PI - angle
}
