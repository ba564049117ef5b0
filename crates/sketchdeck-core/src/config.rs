//! Deck configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! built-in defaults.

use std::path::Path;

use kurbo::Size;
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartKind;
use crate::color::{ColorParseError, parse_hex_color};
use crate::surface::{DEFAULT_BACKGROUND, DEFAULT_STAMP_COLOR};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Bad color in {field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },
    #[error("Invalid size in {field}: must be a positive number")]
    InvalidSize { field: &'static str },
}

/// User-tunable settings, colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub title: String,
    pub window_width: f64,
    pub window_height: f64,
    pub page_background: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub canvas_background: String,
    pub stamp_color: String,
    pub chart_kind: ChartKind,
    pub counter_target: u64,
    pub counter_duration_ms: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: "SketchDeck".to_string(),
            window_width: 1280.0,
            window_height: 900.0,
            page_background: "#242424".to_string(),
            canvas_width: 600.0,
            canvas_height: 400.0,
            canvas_background: "#1a1a1a".to_string(),
            stamp_color: "#646cff".to_string(),
            chart_kind: ChartKind::Bar,
            counter_target: 1234,
            counter_duration_ms: 2000.0,
        }
    }
}

/// Parsed colors of a [`DeckConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub page_background: Color,
    pub canvas_background: Color,
    pub stamp_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            page_background: Color::from_rgba8(0x24, 0x24, 0x24, 255),
            canvas_background: DEFAULT_BACKGROUND,
            stamp_color: DEFAULT_STAMP_COLOR,
        }
    }
}

impl DeckConfig {
    /// Read a config from a JSON file and validate its colors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse a config from JSON text and validate its colors and sizes.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.palette()?;
        config.validate_sizes()?;
        Ok(config)
    }

    /// Reject window and canvas dimensions that are not finite and positive.
    pub fn validate_sizes(&self) -> Result<(), ConfigError> {
        let fields = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidSize { field });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            parse_hex_color(value).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(Palette {
            page_background: parse("page_background", &self.page_background)?,
            canvas_background: parse("canvas_background", &self.canvas_background)?,
            stamp_color: parse("stamp_color", &self.stamp_color)?,
        })
    }

    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }
}
