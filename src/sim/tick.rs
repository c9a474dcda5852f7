//! Fixed-rate simulation tick
//!
//! Advances the ball one step and resolves walls, bricks and paddle in a
//! fixed order. Drawing happens before the tick, in the controller.

use super::collision::{hits_bottom, hits_side, hits_top, reflect_horizontal, reflect_vertical};
use super::state::{GameEvent, GamePhase, GameState, Outcome, Wall};
use crate::heading;

/// Input gathered between two ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x in arena space (paddle centre target)
    pub pointer_x: Option<f32>,
    /// Demo mode - the paddle follows the ball
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Running => {}
        GamePhase::Ending { outcome, ticks_left } => {
            if ticks_left <= 1 {
                state.phase = GamePhase::Terminated { outcome };
                state.events.push(GameEvent::EndScreenShown { outcome });
            } else {
                state.phase = GamePhase::Ending {
                    outcome,
                    ticks_left: ticks_left - 1,
                };
            }
            return;
        }
        GamePhase::Initializing | GamePhase::Terminated { .. } => return,
    }

    state.time_ticks += 1;

    // Pointer input lands before anything moves
    if let Some(x) = input.pointer_x {
        state.move_paddle_to(x);
    }
    if input.autopilot {
        // Wobble around the ball so returns are not always vertical
        let phase = state.time_ticks as f32 * 0.05;
        let offset = (phase.sin() * 0.7 + (phase * 0.37).sin() * 0.3) * state.paddle.size.x * 0.3;
        let x = state.ball.pos.x + offset;
        state.move_paddle_to(x);
    }

    let ball = &mut state.ball;
    ball.pos += heading(ball.angle) * ball.speed;

    if hits_bottom(ball, state.settings.arena_height) {
        end_run(state, Outcome::Loss);
        return;
    }

    if hits_top(ball) {
        if state.blocks.iter().all(Vec::is_empty) {
            end_run(state, Outcome::Win);
            return;
        }
        ball.angle = reflect_vertical(ball.angle);
        state.events.push(GameEvent::WallBounce {
            wall: Wall::Top,
            angle: ball.angle,
        });
    }

    if hits_side(ball, state.settings.arena_width) {
        ball.angle = reflect_horizontal(ball.angle);
        state.events.push(GameEvent::WallBounce {
            wall: Wall::Side,
            angle: ball.angle,
        });
    }

    // Every touched brick goes; the last one decides the new heading
    let mut new_angle = None;
    for (row_idx, row) in state.blocks.iter_mut().enumerate() {
        row.retain(|block| {
            if block.is_touching(ball) {
                new_angle = Some(block.bounce_angle(ball));
                state.events.push(GameEvent::BlockDestroyed {
                    row: row_idx,
                    pos: block.pos,
                });
                state.blocks_destroyed += 1;
                false
            } else {
                true
            }
        });
    }
    if let Some(angle) = new_angle {
        ball.angle = angle;
    }

    if state.paddle.is_touching(ball) {
        ball.angle = state.paddle.bounce_angle(ball);
        state.events.push(GameEvent::PaddleHit { angle: ball.angle });
    }
}

fn end_run(state: &mut GameState, outcome: Outcome) {
    state.phase = GamePhase::Ending {
        outcome,
        ticks_left: state.settings.end_delay_ticks(),
    };
    state.events.push(GameEvent::Ended { outcome });
}
