/// Chip input configuration: load, save, merge, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::theme::{builtin_dark, builtin_light, ThemeDefinition};

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "chip-input.json";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "CHIP_INPUT_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipInputConfig {
    /// `"System"`, `"Dark"`, `"Light"` or the name of a custom theme.
    pub current_theme: String,
    /// Hint shown in the empty text field.
    pub placeholder: String,
    /// Longest label (in chars) accepted when creating a chip. 0 = unlimited.
    pub max_label_len: usize,
    pub font_size: f32,
    pub themes: Vec<ThemeDefinition>,
}

impl Default for ChipInputConfig {
    fn default() -> Self {
        Self {
            current_theme: "System".to_string(),
            placeholder: "Add a chip…".to_string(),
            max_label_len: 64,
            font_size: 14.0,
            themes: vec![builtin_dark(), builtin_light()],
        }
    }
}

impl ChipInputConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `CHIP_INPUT_CONFIG` environment variable
    /// 2. `chip-input.json` next to the executable
    /// 3. `chip-input/chip-input.json` in the user's config directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .or_else(|| dirs::config_dir().map(|d| d.join("chip-input").join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Reads and parses the config at `path` without any fallback.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        config.sanitize();
        config.with_builtins_merged();
        Ok(config)
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error and leaves a broken file untouched.
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{e:#}, using defaults");
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write config at {}", path.display()))
    }

    /// Ensures built-in Dark and Light themes are always present.
    /// User-defined themes with matching names take priority over built-ins.
    pub fn with_builtins_merged(&mut self) {
        if self.find_theme("Dark").is_none() {
            self.themes.insert(0, builtin_dark());
        }
        if self.find_theme("Light").is_none() {
            let insert_at = 1.min(self.themes.len());
            self.themes.insert(insert_at, builtin_light());
        }
    }

    /// Finds a theme by name.
    pub fn find_theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Returns all theme names.
    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(6.0, 72.0)
        } else {
            14.0
        };

        let known = ["System", "Dark", "Light"].contains(&self.current_theme.as_str())
            || self.find_theme(&self.current_theme).is_some();
        if !known {
            tracing::warn!(
                "Unknown theme '{}' in config, falling back to System",
                self.current_theme
            );
            self.current_theme = "System".to_string();
        }
    }
}
