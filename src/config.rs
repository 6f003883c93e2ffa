use std::path::Path;

use egui::Color32;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "DRAW_SOMETHING_CONFIG";

/// Window and canvas settings. Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Canvas color as RGB, also the ink of the eraser
    pub background: [u8; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        let [r, g, b, _] = color::BACKGROUND.to_array();
        Self {
            title: "draw something".to_owned(),
            window_width: 1000.0,
            window_height: 500.0,
            background: [r, g, b],
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reads the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when it is unset or unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}
