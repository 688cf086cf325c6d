use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// How long the splash stays up; 0 skips it
    pub splash_ms: u64,
    /// Start with the filtered data table expanded
    pub show_table: bool,
    /// Log destination. Logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive, e.g. "info" or "genomics_dashboard=debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            splash_ms: 1500,
            show_table: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".genomics-dashboard"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "show_table": true }"#).unwrap();
        assert!(config.show_table);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("genomics-dashboard-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "splash_ms": 0, "log_file": "/tmp/dash.log" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.splash_duration(), Duration::ZERO);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/dash.log")));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let path = env::temp_dir().join(format!("genomics-dashboard-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();

        let result = Config::load_from(&path);
        let _ = fs::remove_file(&path);

        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("Failed to parse config"));
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
