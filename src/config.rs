//! Tracker configuration loaded from TOML

use crate::error::{Result, TrackerError};
use crate::table::LifecyclePolicy;
use crate::types::DEFAULT_OUTPUT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Export file
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// End-of-life thresholds for row coloring
    #[serde(default)]
    pub lifecycle: LifecyclePolicy,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            lifecycle: LifecyclePolicy::default(),
        }
    }
}

impl TrackerConfig {
    /// `~/.asset-tracker/config.toml`, when a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".asset-tracker").join("config.toml"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(contents)
            .map_err(|e| TrackerError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TrackerError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Load from an explicit path, else the default location if present, else defaults.
    ///
    /// Only an explicit path that cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::from_file(&default).or_else(|e| {
                log::warn!("Ignoring {}: {}", default.display(), e);
                Ok(Self::default())
            }),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.lifecycle.critical_days > self.lifecycle.warning_days {
            return Err(TrackerError::ConfigError(format!(
                "critical_days ({}) must not exceed warning_days ({})",
                self.lifecycle.critical_days, self.lifecycle.warning_days
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(TrackerError::ConfigError("output path is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.output, PathBuf::from("assets.csv"));
        assert_eq!(config.lifecycle.lifetime_months, 36);
        assert_eq!(config.lifecycle.critical_days, 90);
        assert_eq!(config.lifecycle.warning_days, 180);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(TrackerConfig::from_toml("").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn test_partial_lifecycle_section() {
        let config = TrackerConfig::from_toml(
            r#"
            output = "out/inventory.csv"

            [lifecycle]
            warning_days = 365
            "#,
        )
        .unwrap();
        assert_eq!(config.output, PathBuf::from("out/inventory.csv"));
        assert_eq!(config.lifecycle.warning_days, 365);
        assert_eq!(config.lifecycle.critical_days, 90);
        assert_eq!(config.lifecycle.lifetime_months, 36);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err = TrackerConfig::from_toml("[lifecycle]\ncritical_days = 200\nwarning_days = 100\n")
            .unwrap_err();
        assert!(matches!(err, TrackerError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(TrackerConfig::from_toml("output = ").is_err());
        assert!(TrackerConfig::from_toml("[lifecycle]\ncritical_days = \"soon\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output = \"custom.csv\"").unwrap();
        let config = TrackerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.output, PathBuf::from("custom.csv"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let err = TrackerConfig::load(Some(Path::new("/nonexistent/asset-tracker.toml"))).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
