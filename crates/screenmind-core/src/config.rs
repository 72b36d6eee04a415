//! Configuration management for ScreenMind.
//!
//! Loads configuration from ${SCREENMIND_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dashboard::Tab;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for ScreenMind configuration and data directories.
    //!
    //! SCREENMIND_HOME resolution order:
    //! 1. SCREENMIND_HOME environment variable (if set)
    //! 2. ~/.config/screenmind (default)

    use std::path::PathBuf;

    /// Returns the ScreenMind home directory.
    ///
    /// Falls back to a relative `.screenmind` directory when no home
    /// directory can be determined.
    pub fn screenmind_home() -> PathBuf {
        if let Ok(home) = std::env::var("SCREENMIND_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".screenmind"),
            |h| h.join(".config").join("screenmind"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        screenmind_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        screenmind_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated sign-in delay in milliseconds
    pub login_delay_ms: u64,

    /// Sign-in timeout in seconds (0 disables)
    pub auth_timeout_secs: u64,

    /// Tab shown after signing in
    pub default_tab: Tab,

    /// Tracing filter for the log file
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_delay_ms: Self::DEFAULT_LOGIN_DELAY_MS,
            auth_timeout_secs: Self::DEFAULT_AUTH_TIMEOUT_SECS,
            default_tab: Tab::default(),
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;
    const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_LOG_FILTER: &str = "screenmind=info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn auth_timeout(&self) -> Option<Duration> {
        if self.auth_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.auth_timeout_secs))
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    pub fn generate() -> Result<String> {
        toml::to_string(&Config::default()).context("Failed to serialize default config to TOML")
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.login_delay(), Duration::from_millis(1500));
        assert_eq!(config.auth_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.default_tab, Tab::Usage);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "login_delay_ms = 200\ndefault_tab = \"mobility\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.login_delay_ms, 200);
        assert_eq!(config.default_tab, Tab::Isolation);
        assert_eq!(config.auth_timeout_secs, 10);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = Config {
            auth_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.auth_timeout(), None);
    }

    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "login_delay_ms = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }
}
