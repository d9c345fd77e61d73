//! Runtime simulation configuration.
//!
//! [`SimConfig`] mirrors the tunable values in [`crate::constants`].  The
//! driver may load it from a TOML file; any key missing from the file keeps
//! its compile-time default, so a file can override just one value:
//!
//! ```toml
//! seed = 7
//! enemy_spawn_ms = 1800
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::entities::Rect;
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Viewport ──────────────────────────────────────────────────────────────
    pub viewport_width: i32,
    pub viewport_height: i32,

    // ── Timing (ms) ───────────────────────────────────────────────────────────
    pub tick_ms: u64,
    pub enemy_spawn_ms: u64,
    pub player_fire_ms: u64,
    pub enemy_fire_ms: u64,
    pub boom_lifetime_ms: u64,

    // ── Population ────────────────────────────────────────────────────────────
    pub max_enemies: usize,
    pub player_life: u32,

    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            tick_ms: TICK_MS,
            enemy_spawn_ms: ENEMY_SPAWN_MS,
            player_fire_ms: PLAYER_FIRE_MS,
            enemy_fire_ms: ENEMY_FIRE_MS,
            boom_lifetime_ms: BOOM_LIFETIME_MS,
            max_enemies: MAX_ENEMIES,
            player_life: PLAYER_LIFE,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        toml::from_str(text).map_err(|source| GameError::ConfigParse { source })
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The playing field, anchored at the origin.
    pub fn viewport(&self) -> Rect {
        Rect::new(0, 0, self.viewport_width, self.viewport_height)
    }

    /// Checks the values the driver is responsible for.  The tick never
    /// validates bounds itself.
    pub fn validate(&self) -> GameResult<()> {
        // Enemies spawn at a random column inside the viewport, so it must be
        // wider than one enemy plus the spawn padding.
        let min_width = ENEMY_WIDTH + 3;
        if self.viewport_width < min_width {
            return Err(GameError::InvalidConfig {
                name: "viewport_width",
                value: self.viewport_width.into(),
                expected: "at least enemy width + 3",
            });
        }
        if self.viewport_height < PLAYER_HEIGHT {
            return Err(GameError::InvalidConfig {
                name: "viewport_height",
                value: self.viewport_height.into(),
                expected: "at least the player height",
            });
        }
        // The two background tiles are placed and recycled at fixed offsets;
        // past these sizes a gap between them scrolls into view.
        if self.viewport_width > BACKGROUND_WIDTH {
            return Err(GameError::InvalidConfig {
                name: "viewport_width",
                value: self.viewport_width.into(),
                expected: "at most the background width",
            });
        }
        let max_height = 2 * BACKGROUND_HEIGHT - BACKGROUND_SECOND_OFFSET;
        if self.viewport_height > max_height {
            return Err(GameError::InvalidConfig {
                name: "viewport_height",
                value: self.viewport_height.into(),
                expected: "no taller than the background tiles can cover",
            });
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidConfig {
                name: "tick_ms",
                value: 0,
                expected: "positive",
            });
        }
        if self.max_enemies == 0 {
            return Err(GameError::InvalidConfig {
                name: "max_enemies",
                value: 0,
                expected: "positive",
            });
        }
        if self.player_life == 0 {
            return Err(GameError::InvalidConfig {
                name: "player_life",
                value: 0,
                expected: "positive",
            });
        }
        Ok(())
    }
}
