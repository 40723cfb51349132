//! Board configuration.
//!
//! Every field has a default, so a configuration file only needs to list the
//! values it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Options for converting sampled brush points into a filled outline.
///
/// The stroke diameter is not part of these options; it comes from the brush
/// tool's size at the time the stroke is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// How much pressure narrows the stroke (0 = uniform width).
    pub thinning: f64,
    /// Minimum spacing between outline vertices, as a fraction of the radius.
    pub smoothing: f64,
    /// How strongly raw input is pulled toward the previous sample.
    pub streamline: f64,
    /// Derive pressure from pointer speed instead of using a constant.
    pub simulate_pressure: bool,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: true,
        }
    }
}

/// Tunables for element geometry, hit-testing and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Pixel tolerance used by the eraser's proximity tests.
    pub erase_threshold: f64,
    /// Length of each arrow head wing.
    pub arrow_head_length: f64,
    /// Angle between the reversed shaft and each wing, in degrees.
    pub arrow_head_angle_deg: f64,
    /// Hand-drawn jitter amplitude for shape descriptors (0 = clean lines).
    pub roughness: f64,
    /// Brush outline options.
    pub brush: StrokeOptions,
    /// Average glyph width as a fraction of the font size.
    pub text_char_width: f64,
    /// Maximum number of retained history snapshots. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            erase_threshold: 5.0,
            arrow_head_length: 20.0,
            arrow_head_angle_deg: 20.0,
            roughness: 1.0,
            brush: StrokeOptions::default(),
            text_char_width: 0.55,
            history_limit: None,
        }
    }
}

impl BoardConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Arrow head angle in radians.
    pub fn arrow_head_angle(&self) -> f64 {
        self.arrow_head_angle_deg.to_radians()
    }
}
