use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WallviewError};
use crate::wall::{StageLimits, WallDimensions};

/// Everything needed to render one preview without user interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub wallpaper: PathBuf,
    pub output: PathBuf,
    /// Requested pan offset, applied as a single drag from the rest position.
    #[serde(default)]
    pub pan_offset: f64,
    #[serde(default)]
    pub wall: WallDimensions,
    #[serde(default)]
    pub stage: StageLimits,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            wallpaper: PathBuf::from("wallpaper.png"),
            output: PathBuf::from("preview.png"),
            pan_offset: 0.0,
            wall: WallDimensions::default(),
            stage: StageLimits::default(),
        }
    }
}

impl PreviewConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WallviewError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WallviewError::Config(e.to_string()))
    }

    /// Load a config file. Relative wallpaper/output paths are resolved
    /// against the directory containing the config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            if config.wallpaper.is_relative() {
                config.wallpaper = dir.join(&config.wallpaper);
            }
            if config.output.is_relative() {
                config.output = dir.join(&config.output);
            }
        }
        Ok(config)
    }
}
