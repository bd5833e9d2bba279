//! Paddle Duel - player vs computer paddle game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (entities, control, collisions, scoring, phases)
//! - `scheduler`: Fixed-rate driver that feeds input in and frames out
//! - `settings`: Session configuration loaded once at start
//! - `sprites`: Sprite resolution with placeholder fallback
//! - `hud`: Score/lives and end screen text

pub mod hud;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod sprites;

pub use scheduler::{FixedStep, FrameSink, InputSource, Pacing, RunOutcome, Scheduler};
pub use settings::{Settings, SettingsError};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal inset of each paddle from its own edge
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const COMPUTER_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Per-axis speed on every serve
    pub const BALL_SPEED: f32 = 7.0;
    /// Vertical nudge applied on each paddle hit
    pub const PADDLE_SPIN: f32 = 1.0;

    pub const STARTING_LIVES: u32 = 3;
}
