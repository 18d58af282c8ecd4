/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

const CONFIG_FILE_NAME: &str = "click-marker.json";

pub const DEFAULT_UNDO_SHORTCUT: &str = "Ctrl+Z";
pub const DEFAULT_REDO_SHORTCUT: &str = "Ctrl+Y";

/// Which visuals to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    /// Follow the OS preference.
    System,
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "System" => Some(Self::System),
            "Dark" => Some(Self::Dark),
            "Light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// "System", "Dark" or "Light".
    pub theme: String,
    pub marker_radius: f32,
    pub marker_color: HexColor,
    /// Shortcut that moves back in the history, e.g. "Ctrl+Z".
    pub undo_shortcut: String,
    /// Shortcut that moves forward in the history, e.g. "Ctrl+Y".
    pub redo_shortcut: String,
    /// Max positions remembered (0 = unlimited).
    pub max_history_depth: usize,
    /// How long an error notification stays on screen.
    pub toast_duration_secs: u64,
    pub show_instructions: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "System".to_string(),
            marker_radius: 25.0,
            marker_color: HexColor::rgb(0x1E, 0x90, 0xFF),
            undo_shortcut: DEFAULT_UNDO_SHORTCUT.to_string(),
            redo_shortcut: DEFAULT_REDO_SHORTCUT.to_string(),
            max_history_depth: 1000,
            toast_duration_secs: 5,
            show_instructions: true,
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `click-marker.json`.
    ///
    /// Falls back to the user config directory when the executable location
    /// is unknown.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .or_else(|| dirs::config_dir().map(|d| d.join("click-marker").join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            return config;
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| {
                serde_json::from_str::<AppConfig>(&contents).map_err(|e| e.to_string())
            });
        let mut config = match parsed {
            Ok(config) => config,
            Err(e) => {
                // Leave the broken file alone so the user can fix it.
                tracing::warn!("Failed to load config at {}: {e}", path.display());
                Self::default()
            }
        };
        config.sanitize();
        config
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// The configured theme; unknown names resolve to `System`.
    pub fn theme_choice(&self) -> ThemeChoice {
        ThemeChoice::from_name(&self.theme).unwrap_or(ThemeChoice::System)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        if ThemeChoice::from_name(&self.theme).is_none() {
            self.theme = "System".to_string();
        }
        if !self.marker_radius.is_finite() {
            self.marker_radius = Self::default().marker_radius;
        }
        self.marker_radius = self.marker_radius.clamp(2.0, 200.0);
        self.toast_duration_secs = self.toast_duration_secs.clamp(1, 60);

        if self.undo_shortcut.trim().is_empty() {
            self.undo_shortcut = DEFAULT_UNDO_SHORTCUT.to_string();
        }
        if self.redo_shortcut.trim().is_empty() {
            self.redo_shortcut = DEFAULT_REDO_SHORTCUT.to_string();
        }
    }
}
