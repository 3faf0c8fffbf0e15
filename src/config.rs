//! Configuration - optional YAML file plus CLI overrides
//!
//! Looked up at `<config dir>/citypulse/config.yml` unless a path is given.
//! A missing file means defaults.

use crate::core::View;
use crate::error::CityError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default clock period
const DEFAULT_TICK_MS: u64 = 1000;
/// Anything faster just burns redraws
const MIN_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View shown at startup, as a path or name
    pub start_view: View,
    /// Dashboard clock period in milliseconds
    pub tick_ms: u64,
    /// Capture mouse clicks (needed for clicking map zones)
    pub mouse: bool,
    /// Write logs here while the TUI owns the terminal
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_view: View::Dashboard,
            tick_ms: DEFAULT_TICK_MS,
            mouse: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("citypulse")
            .join("config.yml")
    }

    /// Load from the default location
    pub fn load() -> Result<Self, CityError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, CityError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| CityError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|source| CityError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CityError> {
        if self.tick_ms < MIN_TICK_MS {
            return Err(CityError::ConfigInvalid(format!(
                "tick_ms must be at least {} (got {})",
                MIN_TICK_MS, self.tick_ms
            )));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_view: /map\ntick_ms: 250").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.start_view, View::CityMap);
        assert_eq!(config.tick_period(), Duration::from_millis(250));
        assert!(config.mouse);
    }

    #[test]
    fn test_view_by_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_view: feedback\nmouse: false").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.start_view, View::Feedback);
        assert!(!config.mouse);
    }

    #[test]
    fn test_bad_view_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_view: /settings").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(CityError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_tick_too_fast() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_ms: 5").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(CityError::ConfigInvalid(_))
        ));
    }
}
