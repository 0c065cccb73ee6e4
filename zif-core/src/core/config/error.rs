use thiserror::Error;

/// The config package specific results.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The errors which can occur while loading the properties of the coordinator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("config file {0} couldn't be found")]
    NotFound(String),
    #[error("failed to read config file {0}, {1}")]
    Io(String, String),
    #[error("config data is invalid, {0}")]
    Parse(String),
    #[error("config value {0} is invalid, {1}")]
    InvalidValue(String, String),
}
