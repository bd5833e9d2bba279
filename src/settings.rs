//! Session settings
//!
//! Field geometry, speeds, lives and tick rate are fixed for a session and
//! supplied once at start. Optionally loaded from a JSON file; any field left
//! out takes its default.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game settings for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal inset of each paddle from its own edge
    pub paddle_margin: f32,
    /// Player paddle speed per tick
    pub player_speed: f32,
    /// Computer paddle tracking speed per tick
    pub computer_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Per-axis ball speed on serve
    pub ball_speed: f32,

    // === Match ===
    pub starting_lives: u32,
    /// Ticks to hold the ball after a point (0 = serve immediately)
    pub round_pause_ticks: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Assets ===
    /// Directory searched for paddle/ball sprites
    pub asset_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            player_speed: PLAYER_SPEED,
            computer_speed: COMPUTER_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            starting_lives: STARTING_LIVES,
            round_pause_ticks: 0,
            tick_rate: TICK_RATE,
            seed: None,

            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject geometry and rates the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_size", self.ball_size)?;
        positive("player_speed", self.player_speed)?;
        positive("computer_speed", self.computer_speed)?;
        positive("ball_speed", self.ball_speed)?;

        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(SettingsError::Invalid {
                field: "paddle_margin",
                reason: "must be zero or positive",
            });
        }
        if self.paddle_height > self.field_height {
            return Err(SettingsError::Invalid {
                field: "paddle_height",
                reason: "paddle taller than the field",
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size > self.field_width {
            return Err(SettingsError::Invalid {
                field: "paddle_margin",
                reason: "paddles leave no room for the ball",
            });
        }
        if self.ball_size >= self.field_height {
            return Err(SettingsError::Invalid {
                field: "ball_size",
                reason: "ball does not fit in the field",
            });
        }
        // A faster ball can jump clean over a paddle between two ticks
        if self.ball_speed >= self.paddle_width + self.ball_size {
            return Err(SettingsError::Invalid {
                field: "ball_speed",
                reason: "ball could skip past a paddle in one tick",
            });
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_rate",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    #[inline]
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    #[inline]
    pub fn field_center(&self) -> Vec2 {
        self.field_size() / 2.0
    }

    #[inline]
    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    #[inline]
    pub fn ball_extent(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.field_size(), Vec2::new(800.0, 600.0));
        assert_eq!(settings.starting_lives, 3);
        assert_eq!(settings.tick_rate, 60);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "starting_lives": 5, "seed": 42 }"#).unwrap();
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.computer_speed, COMPUTER_SPEED);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_zero_lives_rejected() {
        let err = Settings::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "starting_lives",
                ..
            }
        ));
    }

    #[test]
    fn test_paddle_taller_than_field_rejected() {
        let settings = Settings {
            paddle_height: 700.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_speed_rejected() {
        let settings = Settings {
            ball_speed: -7.0,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("ball_speed"));
    }

    #[test]
    fn test_tunneling_ball_speed_rejected() {
        let err = Settings::from_json(r#"{ "ball_speed": 45.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "ball_speed", .. }));

        // Exactly paddle width plus ball size is already too fast
        let settings = Settings {
            ball_speed: PADDLE_WIDTH + BALL_SIZE,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            ball_speed: 39.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
