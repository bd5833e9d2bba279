//! Paddle control policies
//!
//! Turns the player's held-key signal and the computer's tracking decision
//! into a vertical velocity. Velocity is re-derived every tick, never
//! accumulated.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Bounded, GameState, Paddle};

/// Directional signal from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Signal {
    Up,
    Down,
    #[default]
    None,
}

/// Player policy: held key to velocity
pub fn player_velocity(signal: Signal, speed: f32) -> f32 {
    match signal {
        Signal::Up => -speed,
        Signal::Down => speed,
        Signal::None => 0.0,
    }
}

/// Computer policy: greedy tracking of the ball's vertical center.
///
/// No prediction and no reaction delay.
pub fn computer_velocity(paddle: &Paddle, ball: &Ball, speed: f32) -> f32 {
    let ball_y = ball.center().y;
    let paddle_y = paddle.center().y;
    if ball_y < paddle_y {
        -speed
    } else if ball_y > paddle_y {
        speed
    } else {
        0.0
    }
}

/// Set both paddles' velocities for this tick from the current ball state
pub fn apply_controls(state: &mut GameState, player_signal: Signal) {
    state.player.velocity_y = player_velocity(player_signal, state.settings.player_speed);
    state.computer.velocity_y =
        computer_velocity(&state.computer, &state.ball, state.settings.computer_speed);
}
