//! Error types for SocialHub

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SocialHubError>;

#[derive(Error, Debug)]
pub enum SocialHubError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown platform: {0}")]
    NotFound(String),

    #[error("Connection failed: {0}")]
    Connection(String),
}

impl SocialHubError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SocialHubError::Validation(_) => 3,
            SocialHubError::NotFound(_) => 2,
            SocialHubError::Connection(_) => 1,
            SocialHubError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
