//! Decoration preferences persisted as JSON.
//!
//! The config file lives at `<config dir>/git-decorator/config.json`. A missing
//! file means defaults; every field is optional in the file.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitDecoratorError, Result};
use crate::core::label::LabelFormats;
use crate::core::overlay::OverlayPreferences;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DecoratorConfig {
    pub overlays: OverlayPreferences,
    pub labels: LabelFormats,
}

impl DecoratorConfig {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join("config.json"))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| GitDecoratorError::config_read_failed(config_file, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| GitDecoratorError::config_parse_failed(config_file, e))?;
        log::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(config_dir) = config_file.parent() {
            std::fs::create_dir_all(config_dir)
                .map_err(|e| GitDecoratorError::config_write_failed(config_dir, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)
            .map_err(|e| GitDecoratorError::config_write_failed(config_file, e))?;

        Ok(())
    }
}
