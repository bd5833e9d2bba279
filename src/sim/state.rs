//! Game state and core simulation types
//!
//! Paddles and the ball are created once per session and mutated in place.
//! The ball keeps its identity across points; a reset only reinitializes its
//! position and velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::signs::SignSource;
use crate::settings::Settings;

/// Which side a paddle belongs to. Determines control source only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Left paddle, driven by the external up/down signal
    Player,
    /// Right paddle, driven by the tracking AI
    Computer,
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::Player => Role::Computer,
            Role::Computer => Role::Player,
        }
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Short hold after a point; ball frozen at center
    RoundOver { ticks_left: u32 },
    /// Match ended (terminal)
    GameOver { loser: Role },
}

impl GamePhase {
    /// The side that ran out of lives, once the match has ended
    pub fn loser(self) -> Option<Role> {
        match self {
            GamePhase::GameOver { loser } => Some(loser),
            _ => None,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Role),
    Scored { scorer: Role },
    RoundResumed,
    GameOver { loser: Role },
}

/// Shared position/bounds capability of paddles and ball
pub trait Bounded {
    fn bounds(&self) -> Rect;

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Renderer-facing entity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle(Role),
    Ball,
}

/// A paddle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub role: Role,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity for this tick (set by the control adapter)
    pub velocity_y: f32,
}

impl Paddle {
    /// Spawn at the role's side, vertically centered
    pub fn new(role: Role, settings: &Settings) -> Self {
        let x = match role {
            Role::Player => settings.paddle_margin,
            Role::Computer => settings.field_width - settings.paddle_margin - settings.paddle_width,
        };
        let y = (settings.field_height - settings.paddle_height) / 2.0;
        Self {
            role,
            pos: Vec2::new(x, y),
            size: settings.paddle_size(),
            velocity_y: 0.0,
        }
    }

    /// Move vertically by `dy`, keeping the paddle inside `[0, field_height]`
    pub fn advance(&mut self, dy: f32, field_height: f32) {
        let max_y = (field_height - self.size.y).max(0.0);
        self.pos.y = (self.pos.y + dy).clamp(0.0, max_y);
    }

    /// Apply this tick's velocity
    pub fn apply_velocity(&mut self, field_height: f32) {
        self.advance(self.velocity_y, field_height);
    }
}

impl Bounded for Paddle {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Create a ball already served from `center`
    pub fn new(size: Vec2, center: Vec2, speed: f32, signs: &mut impl SignSource) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            size,
            vel: Vec2::ZERO,
        };
        ball.reset(center, speed, signs);
        ball
    }

    /// Move by velocity (no clamping, no collision)
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Re-center and serve in a random diagonal direction with `speed` per axis
    pub fn reset(&mut self, center: Vec2, speed: f32, signs: &mut impl SignSource) {
        self.pos = center - self.size / 2.0;
        let dir_x = signs.next_sign();
        let dir_y = signs.next_sign();
        self.vel = Vec2::new(dir_x * speed, dir_y * speed);
    }
}

impl Bounded for Ball {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Per-tick output for the renderer and HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub player_paddle: Rect,
    pub computer_paddle: Rect,
    pub ball: Rect,
    pub player_score: u32,
    pub computer_score: u32,
    pub player_lives: u32,
    pub computer_lives: u32,
    pub phase: GamePhase,
}

impl Frame {
    /// Entities in draw order
    pub fn entities(&self) -> [(EntityKind, Rect); 3] {
        [
            (EntityKind::Paddle(Role::Player), self.player_paddle),
            (EntityKind::Paddle(Role::Computer), self.computer_paddle),
            (EntityKind::Ball, self.ball),
        ]
    }

    pub fn loser(&self) -> Option<Role> {
        self.phase.loser()
    }
}

/// Complete match state, owned by the driver and mutated only by `tick`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub computer_score: u32,
    pub player_lives: u32,
    pub computer_lives: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Start a match: paddles centered, ball served from the field center
    pub fn new(settings: Settings, signs: &mut impl SignSource) -> Self {
        let ball = Ball::new(
            settings.ball_extent(),
            settings.field_center(),
            settings.ball_speed,
            signs,
        );
        Self {
            player: Paddle::new(Role::Player, &settings),
            computer: Paddle::new(Role::Computer, &settings),
            ball,
            player_score: 0,
            computer_score: 0,
            player_lives: settings.starting_lives,
            computer_lives: settings.starting_lives,
            phase: GamePhase::Playing,
            time_ticks: 0,
            settings,
        }
    }

    pub fn score(&self, role: Role) -> u32 {
        match role {
            Role::Player => self.player_score,
            Role::Computer => self.computer_score,
        }
    }

    pub fn lives(&self, role: Role) -> u32 {
        match role {
            Role::Player => self.player_lives,
            Role::Computer => self.computer_lives,
        }
    }

    /// Serve the ball again from the field center
    pub fn reset_ball(&mut self, signs: &mut impl SignSource) {
        let center = self.settings.field_center();
        self.ball.reset(center, self.settings.ball_speed, signs);
    }

    pub fn is_over(&self) -> bool {
        self.loser().is_some()
    }

    pub fn loser(&self) -> Option<Role> {
        self.phase.loser()
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.time_ticks,
            player_paddle: self.player.bounds(),
            computer_paddle: self.computer.bounds(),
            ball: self.ball.bounds(),
            player_score: self.player_score,
            computer_score: self.computer_score,
            player_lives: self.player_lives,
            computer_lives: self.computer_lives,
            phase: self.phase,
        }
    }
}
