//! Brick wall layout
//!
//! Odd rows are shifted right by half a brick and hold one brick fewer, so
//! the joints stagger like a real wall.

use super::state::{Block, Grid};
use crate::settings::Settings;
use crate::{Color, Point};

/// Build the starting wall of bricks
pub fn build_wall(settings: &Settings) -> Grid {
    let size = settings.block_size();
    let width = size.x;

    (0..settings.rows)
        .map(|row| {
            let stagger = row % 2;
            let offset = stagger as f32 * width / 2.0;
            let y = row as f32 * settings.block_height + settings.margin / 2.0;

            (0..settings.columns.saturating_sub(stagger))
                .map(|col| {
                    let x = col as f32 * width + offset + settings.margin;
                    Block::new(Point::new(x, y), size, Color::BRICK, settings.block_gap)
                })
                .collect()
        })
        .collect()
}
