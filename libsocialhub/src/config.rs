//! Configuration management for SocialHub

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Simulated connect latency used when the config does not say otherwise.
const DEFAULT_CONNECT_LATENCY_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub connect: ConnectConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Latency of the simulated connection round-trip, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_CONNECT_LATENCY_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Platforms targeted when a compose request names none.
    #[serde(default)]
    pub platforms: Vec<String>,
}

fn default_latency_ms() -> u64 {
    DEFAULT_CONNECT_LATENCY_MS
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration, falling back to defaults if no file exists.
    ///
    /// A present-but-malformed file is still an error.
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following the XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SOCIALHUB_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("socialhub").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.connect.latency_ms, 2000);
        assert!(config.defaults.platforms.is_empty());
    }

    #[test]
    fn test_load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[connect]
latency_ms = 250

[defaults]
platforms = ["twitter", "linkedin"]
"#
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.connect.latency_ms, 250);
        assert_eq!(config.defaults.platforms, vec!["twitter", "linkedin"]);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.connect.latency_ms, 2000);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[connect\nlatency_ms = nope").unwrap();

        let result = Config::load_from_path(&file.path().to_path_buf());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = Config::load_from_path(&PathBuf::from("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        std::env::set_var("SOCIALHUB_CONFIG", "/tmp/custom-socialhub.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("SOCIALHUB_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/custom-socialhub.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_default_location() {
        std::env::remove_var("SOCIALHUB_CONFIG");
        let path = resolve_config_path().unwrap();

        assert!(path.ends_with("socialhub/config.toml"));
    }
}
