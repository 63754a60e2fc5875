use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::features::unit_converter::{Category, FormatOptions};
use crate::shared::error::{ConverterError, ConverterResult};

/// User preferences for the converter. Conversions themselves are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    pub default_category: Category,
    pub format: FormatOptions,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            default_category: Category::Distance,
            format: FormatOptions::default(),
        }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> ConverterResult<PathBuf> {
        ProjectDirs::from("com", "unitconversions", "unit-conversions")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| ConverterError::Settings("Failed to determine config directory".to_string()))
    }

    pub fn load() -> ConverterResult<Self> {
        Self::load_from(&Self::get_settings_path()?)
    }

    /// Load settings, falling back to defaults when they cannot be read
    pub fn load_or_default() -> Self {
        match Self::get_settings_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!("Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Failed to load settings: {}", e);
            Self::default()
        })
    }

    /// Read settings from `path`. A missing file is created with defaults.
    pub fn load_from(path: &Path) -> ConverterResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            tracing::debug!(path = %path.display(), "wrote default settings");
            return Ok(settings);
        }

        let content = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self) -> ConverterResult<()> {
        self.save_to(&Self::get_settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> ConverterResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
