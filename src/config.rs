//! Host-facing engine configuration.
//!
//! The host supplies the active category, colors, handle sizes, and
//! other knobs through this struct. It can be built in code or imported
//! from JSON; derived values (colors, the fill transparency percent)
//! are validated once when the engine is constructed.

use serde::{Deserialize, Serialize};

use crate::color_utils::Color;
use crate::constants::{handle, threshold};
use crate::error::ConfigError;

/// Engine configuration supplied by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Draw category labels above annotations.
    pub show_annotation_labels: bool,
    /// Category name stamped onto new annotations. Drawing is disabled
    /// while this is `None`.
    pub active_category: Option<String>,
    /// Numeric category identifier stamped onto new annotations.
    pub active_category_id: u32,
    /// Hex fill/outline color stamped onto new annotations.
    pub active_color: String,
    /// Side length of an unhovered resize handle.
    pub handle_size: f32,
    /// Side length of the resize handle under the pointer.
    pub handle_size_hovered: f32,
    /// Margin around an annotation that still counts as a hover hit.
    pub hover_threshold: f32,
    /// Font specification passed through to the drawing surface.
    pub label_font: String,
    /// Hex color for label text.
    pub label_fill_color: String,
    /// Scale applied to the view when the engine is created.
    pub initial_zoom: f32,
    /// Annotation fill transparency as a stringified percent, e.g. `"20%"`.
    pub fill_transparency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_annotation_labels: true,
            active_category: None,
            active_category_id: 0,
            active_color: "#FF0000".to_string(),
            handle_size: handle::SIZE,
            handle_size_hovered: handle::SIZE_HOVERED,
            hover_threshold: threshold::HOVER,
            label_font: "14px sans-serif".to_string(),
            label_fill_color: "#FFFFFF".to_string(),
            initial_zoom: 1.0,
            fill_transparency: "20%".to_string(),
        }
    }
}

impl Config {
    /// Import a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export this configuration to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse `fill_transparency` into an alpha in `0.0..=1.0`.
    pub fn fill_alpha(&self) -> Result<f32, ConfigError> {
        let invalid = || ConfigError::InvalidTransparency {
            value: self.fill_transparency.clone(),
        };
        let percent: f32 = self
            .fill_transparency
            .trim()
            .strip_suffix('%')
            .ok_or_else(invalid)?
            .trim()
            .parse()
            .map_err(|_| invalid())?;
        if (0.0..=100.0).contains(&percent) {
            Ok(percent / 100.0)
        } else {
            Err(invalid())
        }
    }

    /// Check every derived field parses. Called once at engine creation
    /// so the render path can stay infallible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Color::from_hex(&self.active_color)?;
        Color::from_hex(&self.label_fill_color)?;
        self.fill_alpha()?;
        Ok(())
    }
}
