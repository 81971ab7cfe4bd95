//! Canvas configuration.

use crate::shapes::PaletteColor;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default extents and color applied to newly created elements.
///
/// Missing fields fall back to the built-in defaults, so a partial JSON
/// object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub sticky_note_size: Size,
    pub rectangle_size: Size,
    pub text_box_size: Size,
    pub circle_radius: f64,
    /// Color selected when a canvas session starts.
    pub default_color: PaletteColor,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            sticky_note_size: Size::new(150.0, 150.0),
            rectangle_size: Size::new(100.0, 100.0),
            text_box_size: Size::new(150.0, 50.0),
            circle_radius: 50.0,
            default_color: PaletteColor::default(),
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every extent is finite and positive.
    pub fn validate(&self) -> ConfigResult<()> {
        let extents = [
            ("sticky_note_size.width", self.sticky_note_size.width),
            ("sticky_note_size.height", self.sticky_note_size.height),
            ("rectangle_size.width", self.rectangle_size.width),
            ("rectangle_size.height", self.rectangle_size.height),
            ("text_box_size.width", self.text_box_size.width),
            ("text_box_size.height", self.text_box_size.height),
            ("circle_radius", self.circle_radius),
        ];
        match extents
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            Some((field, value)) => Err(ConfigError::Invalid { field, value }),
            None => Ok(()),
        }
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded canvas config from {}", path.display());
        Ok(config)
    }
}
