//! Game settings
//!
//! Field geometry and session options. Persisted as JSON next to the binary's
//! working directory; missing or broken files fall back to defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a settings value cannot build a playable field
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Field width or height is zero, negative or not finite
    InvalidField { width: f32, height: f32 },
    /// Ball size is zero, negative, not finite, or does not fit the field
    InvalidBall { size: f32 },
    /// Paddle is zero-sized or the two paddles do not fit side by side
    InvalidPaddle { width: f32, height: f32 },
    /// Session length is not a positive number of seconds
    InvalidSession { seconds: f32 },
    /// The JSON could not be parsed
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidField { width, height } => {
                write!(f, "invalid field size {}x{}", width, height)
            }
            SettingsError::InvalidBall { size } => write!(f, "invalid ball size {}", size),
            SettingsError::InvalidPaddle { width, height } => {
                write!(f, "invalid paddle size {}x{}", width, height)
            }
            SettingsError::InvalidSession { seconds } => {
                write!(f, "invalid session length {}s", seconds)
            }
            SettingsError::Parse(msg) => write!(f, "settings parse error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Entities ===
    /// Edge length of the square ball
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Session ===
    /// Serve RNG seed; a fresh one is picked per run when unset
    pub seed: Option<u64>,
    /// How long the headless binary drives the field
    pub session_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_size: BALL_SIZE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            seed: None,
            session_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "duel_pong.json";

    /// Reject settings that cannot produce a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(SettingsError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !positive(self.ball_size)
            || self.ball_size >= self.field_width
            || self.ball_size >= self.field_height
        {
            return Err(SettingsError::InvalidBall {
                size: self.ball_size,
            });
        }
        if !positive(self.paddle_width)
            || !positive(self.paddle_height)
            || self.paddle_width * 2.0 >= self.field_width
        {
            return Err(SettingsError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if !positive(self.session_seconds) {
            return Err(SettingsError::InvalidSession {
                seconds: self.session_seconds,
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from `path`, writing defaults there on first run
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = Self::default();
        settings.save_to(path);
        settings
    }

    /// Load settings from the working directory
    pub fn load() -> Self {
        Self::load_or_init(Path::new(Self::FILE_NAME))
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings: {}", e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Number of fixed ticks in one session
    pub fn session_ticks(&self) -> u64 {
        (self.session_seconds / SIM_DT).round() as u64
    }
}
