//! Collision detection and response
//!
//! Discrete-step model: the ball moves first, then overlaps are checked.
//! Wall hits reflect the vertical velocity without correcting overshoot.
//! Paddle hits only count while the ball travels toward the paddle, so a ball
//! still overlapping after a bounce is never flipped back.

use super::signs::SignSource;
use super::state::{Ball, Bounded, GameEvent, GameState, Paddle, Role};
use crate::consts::PADDLE_SPIN;

/// Reflect off the top or bottom wall. Returns true on a bounce.
pub fn wall_collision(ball: &mut Ball, field_height: f32) -> bool {
    let bounds = ball.bounds();
    if bounds.top() <= 0.0 || bounds.bottom() >= field_height {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Whether the ball is heading toward this paddle's face
#[inline]
fn approaching(ball: &Ball, paddle: &Paddle) -> bool {
    match paddle.role {
        Role::Player => ball.vel.x < 0.0,
        Role::Computer => ball.vel.x > 0.0,
    }
}

/// Bounce the ball off a paddle. Returns true on a hit.
///
/// A hit sends the ball back the way it came and nudges the vertical
/// velocity by one unit in a random direction.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle, signs: &mut impl SignSource) -> bool {
    if !approaching(ball, paddle) || !ball.bounds().intersects(&paddle.bounds()) {
        return false;
    }
    ball.vel.x = -ball.vel.x;
    ball.vel.y += signs.next_sign() * PADDLE_SPIN;
    true
}

/// Move paddles and ball one step and resolve all collisions.
///
/// Order is fixed: paddles, ball, walls, player paddle, computer paddle.
/// At most one paddle hit resolves per tick, so the ball always leaves a
/// tick moving away from the paddle it struck.
pub fn step_physics(state: &mut GameState, signs: &mut impl SignSource, events: &mut Vec<GameEvent>) {
    let field_height = state.settings.field_height;

    state.player.apply_velocity(field_height);
    state.computer.apply_velocity(field_height);

    state.ball.step();

    if wall_collision(&mut state.ball, field_height) {
        events.push(GameEvent::WallBounce);
    }

    for paddle in [&state.player, &state.computer] {
        if paddle_collision(&mut state.ball, paddle, signs) {
            log::debug!(
                "tick {}: {:?} paddle hit, ball vel ({}, {})",
                state.time_ticks,
                paddle.role,
                state.ball.vel.x,
                state.ball.vel.y
            );
            events.push(GameEvent::PaddleHit(paddle.role));
            break;
        }
    }
}
