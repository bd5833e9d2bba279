//! Sprite resolution with placeholder fallback
//!
//! Paddles and ball may be drawn from PNG files in the asset directory. A
//! missing or unreadable file never reaches the simulation: the entity is
//! drawn as a solid placeholder of the same bounding size instead.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{EntityKind, Role};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub const PLAYER_SPRITE: &str = "player.png";
pub const COMPUTER_SPRITE: &str = "computer.png";
pub const BALL_SPRITE: &str = "ball.png";

/// Placeholder colors
pub const BLUE: Rgb = Rgb(50, 100, 255);
pub const RED: Rgb = Rgb(255, 50, 50);
pub const WHITE: Rgb = Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Why a sprite could not be used
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a PNG image", .path.display())]
    NotPng { path: PathBuf },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },
}

/// How an entity is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Appearance {
    /// Image file of `pixels` dimensions, scaled to the entity's bounds
    Sprite {
        path: PathBuf,
        pixels: UVec2,
        size: Vec2,
    },
    /// Solid rectangle
    Placeholder { size: Vec2, color: Rgb },
}

impl Appearance {
    pub fn size(&self) -> Vec2 {
        match self {
            Appearance::Sprite { size, .. } | Appearance::Placeholder { size, .. } => *size,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Appearance::Placeholder { .. })
    }
}

/// Decode the whole image and return its pixel dimensions
fn read_png(path: &Path) -> Result<UVec2, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(AssetError::NotPng {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |source: png::DecodingError| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .map_err(decode_err)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    Ok(UVec2::new(info.width, info.height))
}

/// Resolve a sprite file, falling back to a placeholder of `size` and `color`
pub fn load_sprite(dir: &Path, file_name: &str, size: Vec2, color: Rgb) -> Appearance {
    let path = dir.join(file_name);
    match read_png(&path) {
        Ok(pixels) => {
            log::debug!("Loaded sprite {} ({}x{})", path.display(), pixels.x, pixels.y);
            Appearance::Sprite { path, pixels, size }
        }
        Err(err) => {
            log::debug!("Using placeholder: {err}");
            Appearance::Placeholder { size, color }
        }
    }
}

/// Appearances for all three entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub player: Appearance,
    pub computer: Appearance,
    pub ball: Appearance,
}

impl SpriteSet {
    pub fn load(settings: &Settings) -> Self {
        let dir = settings.asset_dir.as_path();
        Self {
            player: load_sprite(dir, PLAYER_SPRITE, settings.paddle_size(), BLUE),
            computer: load_sprite(dir, COMPUTER_SPRITE, settings.paddle_size(), RED),
            ball: load_sprite(dir, BALL_SPRITE, settings.ball_extent(), WHITE),
        }
    }

    pub fn for_entity(&self, kind: EntityKind) -> &Appearance {
        match kind {
            EntityKind::Paddle(Role::Player) => &self.player,
            EntityKind::Paddle(Role::Computer) => &self.computer,
            EntityKind::Ball => &self.ball,
        }
    }

    pub fn placeholder_count(&self) -> usize {
        [&self.player, &self.computer, &self.ball]
            .iter()
            .filter(|a| a.is_placeholder())
            .count()
    }
}
