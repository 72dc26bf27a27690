//! Health bar configuration
//!
//! Loaded once at startup from a JSON file and never mutated afterwards.
//! Every field has a default, so a partial file (or a missing one) still
//! yields a usable configuration.
//!
//! # Example file
//!
//! ```json
//! {
//!   "pixel_aligned": true,
//!   "health_bar_offset": 2,
//!   "type_offsets": { "Bat": 9, "RockCrab": 4 },
//!   "show_health_numbers": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the health bar overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthBarsConfig {
    /// Snap the inner bar to whole texture pixels
    pub pixel_aligned: bool,

    /// Offset of the bar above the sprite's top edge in texture pixels
    /// (larger values move the bar up)
    pub health_bar_offset: i32,

    /// Extra per-type offset in texture pixels (positive moves the bar down)
    pub type_offsets: HashMap<String, i32>,

    /// Draw "current/max" on top of the bar
    pub show_health_numbers: bool,
}

impl Default for HealthBarsConfig {
    fn default() -> Self {
        HealthBarsConfig {
            pixel_aligned: true,
            health_bar_offset: 0,
            type_offsets: default_type_offsets(),
            show_health_numbers: false,
        }
    }
}

/// Offsets for the stock monster roster, whose sprites don't fill their
/// bounding boxes the same way
fn default_type_offsets() -> HashMap<String, i32> {
    [
        ("Bat", 9),
        ("BigSlime", 0),
        ("DustSpirit", 4),
        ("Fly", 4),
        ("Ghost", 0),
        ("GreenSlime", 6),
        ("Grub", 6),
        ("LavaCrab", 4),
        ("Mummy", 0),
        ("RockCrab", 4),
        ("RockGolem", 2),
        ("Serpent", 0),
        ("ShadowBrute", 0),
        ("Skeleton", 0),
    ]
    .into_iter()
    .map(|(name, offset)| (name.to_string(), offset))
    .collect()
}

impl HealthBarsConfig {
    /// Reads the configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: HealthBarsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Reads the configuration, writing the defaults first if the file
    /// doesn't exist yet
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            let config = HealthBarsConfig::default();
            config.save_to_file(path)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        Self::load_from_file(path)
    }

    /// Writes the configuration as pretty-printed JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Configured offset for a creature type, if it is listed
    pub fn type_offset(&self, type_name: &str) -> Option<i32> {
        self.type_offsets.get(type_name).copied()
    }

    /// Default config location: `<config dir>/health_bars/config.json`,
    /// or `./config.json` when the platform has no config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("health_bars").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("./config.json"))
    }
}

/// Error types for loading and saving the configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("health_bars_test_{}_{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_defaults() {
        let config = HealthBarsConfig::default();
        assert!(config.pixel_aligned);
        assert_eq!(config.health_bar_offset, 0);
        assert!(!config.show_health_numbers);
        assert_eq!(config.type_offset("Bat"), Some(9));
        assert_eq!(config.type_offset("Dragon"), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: HealthBarsConfig =
            serde_json::from_str(r#"{ "show_health_numbers": true }"#).unwrap();
        assert!(config.show_health_numbers);
        assert!(config.pixel_aligned);
        assert_eq!(config.type_offset("RockCrab"), Some(4));
    }

    #[test]
    fn test_type_offsets_replace_defaults() {
        let config: HealthBarsConfig =
            serde_json::from_str(r#"{ "type_offsets": { "Bat": 3 } }"#).unwrap();
        assert_eq!(config.type_offset("Bat"), Some(3));
        assert_eq!(config.type_offset("RockCrab"), None);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let result = HealthBarsConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = HealthBarsConfig::load_from_file("/nonexistent/health_bars/config.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let path = temp_config_path("create");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let created = HealthBarsConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, HealthBarsConfig::default());

        let reloaded = HealthBarsConfig::load_or_create(&path).unwrap();
        assert_eq!(reloaded, created);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
