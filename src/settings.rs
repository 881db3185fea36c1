//! Game settings
//!
//! Loaded from `cannon-game.json` in the working directory when present.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Default settings file name
pub const SETTINGS_FILE: &str = "cannon-game.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Model ===
    /// Cannon width and height
    pub cannon_size: f32,
    /// Ball diameter
    pub ball_size: f32,
    /// Wind seed; `None` picks one from the clock
    pub seed: Option<u64>,

    // === Animation ===
    /// Simulated seconds per tick
    pub tick_dt: f32,
    /// Frames shown per second while a shot flies (0 = as fast as possible)
    pub frame_rate: u32,
    /// Give up animating a shot after this many ticks
    pub max_ticks_per_shot: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cannon_size: CANNON_SIZE,
            ball_size: BALL_SIZE,
            seed: None,

            tick_dt: SIM_DT,
            frame_rate: FRAME_RATE,
            max_ticks_per_shot: MAX_TICKS_PER_SHOT,
        }
    }
}

impl Settings {
    /// Settings for runs that should not wait between frames
    pub fn unpaced() -> Self {
        Self {
            frame_rate: 0,
            ..Self::default()
        }
    }

    /// Wall-clock time between frames, if pacing is enabled
    pub fn frame_interval(&self) -> Option<Duration> {
        (self.frame_rate > 0).then(|| Duration::from_secs_f64(1.0 / self.frame_rate as f64))
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject sizes and tick lengths that would stall or break a shot
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("tick_dt", self.tick_dt),
            ("cannon_size", self.cannon_size),
            ("ball_size", self.ball_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `cannon-game.json`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {SETTINGS_FILE}");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {SETTINGS_FILE}: {e}");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
