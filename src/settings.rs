use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::renderer::DEFAULT_GRID_SPACING;
use crate::state::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};

/// Names a JSON file whose settings override the persisted ones (native only).
pub const SETTINGS_ENV_VAR: &str = "WHITEBOARD_SETTINGS";
pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 20.0;
pub const DEFAULT_TITLE: &str = "Untitled Whiteboard";

pub const DEFAULT_PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xff, 0x00, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x00),
    Color32::from_rgb(0x00, 0x00, 0xff),
    Color32::from_rgb(0xff, 0xff, 0x00),
    Color32::from_rgb(0xff, 0x00, 0xff),
    Color32::from_rgb(0x00, 0xff, 0xff),
    Color32::from_rgb(0xff, 0xa5, 0x00),
    Color32::from_rgb(0x80, 0x00, 0x80),
    Color32::from_rgb(0xff, 0xc0, 0xcb),
];

/// User preferences. The drawing itself is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_color: Color32,
    pub default_stroke_width: f32,
    pub show_grid: bool,
    pub grid_spacing: f32,
    pub title: String,
    pub palette: Vec<Color32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            show_grid: false,
            grid_spacing: DEFAULT_GRID_SPACING,
            title: DEFAULT_TITLE.to_owned(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Settings::default().overlay_json(json)
    }

    /// Replaces only the fields present in `json`; everything else keeps its
    /// current value.
    pub fn overlay_json(&self, json: &str) -> Result<Self, SettingsError> {
        let overrides: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut merged = match serde_json::to_value(self)? {
            serde_json::Value::Object(fields) => fields,
            _ => serde_json::Map::new(),
        };
        merged.extend(overrides);
        let settings: Settings = serde_json::from_value(serde_json::Value::Object(merged))?;
        Ok(settings.sanitized())
    }

    pub fn overlay_file(&self, path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        self.overlay_json(&json)
    }

    /// Applies the file named by [`SETTINGS_ENV_VAR`], if set, on top of
    /// `self`. A broken file is logged and skipped.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_env_overrides(self) -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) else {
            return self;
        };
        match self.overlay_file(&path) {
            Ok(settings) => {
                log::info!("applied settings from {:?}", path);
                settings
            }
            Err(err) => {
                log::warn!("ignoring settings file {:?}: {}", path, err);
                self
            }
        }
    }

    /// Clamps values a hand-edited file could get wrong.
    pub fn sanitized(mut self) -> Self {
        self.default_stroke_width = if self.default_stroke_width.is_nan() {
            DEFAULT_STROKE_WIDTH
        } else {
            self.default_stroke_width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
        };
        if self.grid_spacing.is_nan() || self.grid_spacing < 1.0 {
            self.grid_spacing = DEFAULT_GRID_SPACING;
        }
        if self.palette.is_empty() {
            self.palette = DEFAULT_PALETTE.to_vec();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json(r#"{ "show_grid": true }"#).unwrap();
        assert!(settings.show_grid);
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert_eq!(settings.palette.len(), 10);
        assert_eq!(settings.default_stroke_width, 2.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "default_stroke_width": 99.0, "grid_spacing": 0.0, "palette": [] }"#)
                .unwrap();
        assert_eq!(settings.default_stroke_width, MAX_STROKE_WIDTH);
        assert_eq!(settings.grid_spacing, DEFAULT_GRID_SPACING);
        assert_eq!(settings.palette, DEFAULT_PALETTE.to_vec());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn overrides_keep_fields_they_do_not_name() {
        let stored = Settings {
            title: "Roadmap".to_owned(),
            default_stroke_width: 6.0,
            ..Default::default()
        };
        let settings = stored.overlay_json(r#"{ "show_grid": true }"#).unwrap();

        assert!(settings.show_grid);
        assert_eq!(settings.title, "Roadmap");
        assert_eq!(settings.default_stroke_width, 6.0);
    }

    #[test]
    fn non_object_override_is_an_error() {
        assert!(Settings::default().overlay_json("[1, 2]").is_err());
    }
}
