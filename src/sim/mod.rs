//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per `tick`, no wall-clock time
//! - Randomness only through a `SignSource`
//! - No rendering, input polling or platform dependencies

pub mod collision;
pub mod control;
pub mod rect;
pub mod round;
pub mod scoring;
pub mod signs;
pub mod state;
pub mod tick;

pub use collision::{paddle_collision, step_physics, wall_collision};
pub use control::{Signal, apply_controls, computer_velocity, player_velocity};
pub use rect::Rect;
pub use scoring::{check_scoring, exit_side};
pub use signs::{ScriptedSigns, SeededSigns, SignSource};
pub use state::{
    Ball, Bounded, EntityKind, Frame, GameEvent, GamePhase, GameState, Paddle, Role,
};
pub use tick::{TickInput, tick};
