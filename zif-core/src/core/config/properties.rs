use std::env;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_more::Display;
use directories::UserDirs;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::{ConfigError, Result};

const DEFAULT_METADATA_TIMEOUT_SECS: fn() -> u64 = || 120;
const DEFAULT_DOWNLOAD_DIRECTORY: fn() -> PathBuf = || {
    UserDirs::new()
        .map(|e| {
            e.download_dir()
                .map(PathBuf::from)
                .unwrap_or_else(|| e.home_dir().join("Downloads"))
        })
        .unwrap_or_else(|| env::temp_dir().join("zif"))
};
const DEFAULT_BIND_ADDRESS: fn() -> IpAddr = || IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_ENGINE_URL: fn() -> String = || "http://127.0.0.1:3030".to_string();

const DEFAULT_CONFIG_FILENAME: &str = "application";
const CONFIG_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// In-between wrapper for serde to support the `zif` root key.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
struct PropertiesWrapper {
    #[serde(default)]
    pub zif: ZifProperties,
}

/// The static properties of the stream coordinator.
#[derive(Debug, Display, Default, Clone, Serialize, Deserialize, PartialEq)]
#[display("stream: {}, engine: {}", stream, engine)]
pub struct ZifProperties {
    #[serde(default)]
    pub stream: StreamProperties,
    #[serde(default)]
    pub engine: EngineProperties,
}

impl ZifProperties {
    /// Create a new [ZifProperties] which will look for the `application.yml` config file
    /// within the working directory.
    /// It will parse the config file if found, else uses the defaults instead.
    pub fn new_auto() -> Self {
        Self::from_filename(DEFAULT_CONFIG_FILENAME)
    }

    /// Search the working directory for the given config filename with a yaml extension.
    /// The defaults are used when no config file could be found or read.
    pub fn from_filename(filename: &str) -> Self {
        debug!("Searching for config file with name \"{}\"", filename);
        let data = CONFIG_EXTENSIONS
            .iter()
            .map(|extension| Self::config_file_path(filename, extension))
            .find_map(|path| match fs::read_to_string(&path) {
                Ok(data) => {
                    debug!("Found config file {:?}", path);
                    Some(data)
                }
                Err(_) => {
                    trace!("Config file location {:?} doesn't exist", path);
                    None
                }
            })
            .unwrap_or_default();

        Self::from_str(data.as_str())
    }

    /// Load the properties from the given config file path.
    /// Unlike [ZifProperties::from_filename], a missing or invalid file results in an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display_path = path.to_string_lossy().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound(display_path));
        }

        let data = fs::read_to_string(path).map_err(|e| ConfigError::Io(display_path, e.to_string()))?;
        let properties = serde_yaml::from_str::<PropertiesWrapper>(data.as_str())
            .map(|e| e.zif)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        properties.stream.validate()?;
        Ok(properties)
    }

    /// Parse the given yaml config data.
    /// Invalid config data results in the defaults being used.
    pub fn from_str(data: &str) -> Self {
        trace!("Parsing config data {}", data);
        if data.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str::<PropertiesWrapper>(data) {
            Ok(wrapper) => {
                debug!("Parsed config data {:?}", wrapper);
                let mut properties = wrapper.zif;
                if let Err(e) = properties.stream.validate() {
                    warn!("{}, using default metadata timeout instead", e);
                    properties.stream.metadata_timeout_secs = DEFAULT_METADATA_TIMEOUT_SECS();
                }
                properties
            }
            Err(e) => {
                warn!("Failed to parse config, {}, using defaults instead", e);
                Self::default()
            }
        }
    }

    fn config_file_path(filename: &str, extension: &str) -> PathBuf {
        env::current_dir()
            .unwrap_or_default()
            .join(format!("{}.{}", filename, extension))
    }
}

/// The properties of the stream sessions.
#[derive(Debug, Display, Clone, Serialize, Deserialize, PartialEq)]
#[display(
    "metadata_timeout_secs: {}, download_directory: {:?}, bind_address: {}",
    metadata_timeout_secs,
    download_directory,
    bind_address
)]
pub struct StreamProperties {
    /// The max seconds to wait for the metadata of a new torrent.
    #[serde(alias = "metadata-timeout-secs")]
    #[serde(default = "DEFAULT_METADATA_TIMEOUT_SECS")]
    pub metadata_timeout_secs: u64,
    /// The directory in which new torrents are downloaded.
    #[serde(alias = "download-directory")]
    #[serde(default = "DEFAULT_DOWNLOAD_DIRECTORY")]
    pub download_directory: PathBuf,
    /// The address on which the stream servers are bound.
    #[serde(alias = "bind-address")]
    #[serde(default = "DEFAULT_BIND_ADDRESS")]
    pub bind_address: IpAddr,
}

impl StreamProperties {
    /// Returns the metadata timeout as duration.
    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_secs(self.metadata_timeout_secs)
    }

    /// Verify that the properties can be used for stream sessions.
    /// A zero metadata timeout would fail every request for a new torrent.
    pub fn validate(&self) -> Result<()> {
        if self.metadata_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "metadata_timeout_secs".to_string(),
                "must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for StreamProperties {
    fn default() -> Self {
        Self {
            metadata_timeout_secs: DEFAULT_METADATA_TIMEOUT_SECS(),
            download_directory: DEFAULT_DOWNLOAD_DIRECTORY(),
            bind_address: DEFAULT_BIND_ADDRESS(),
        }
    }
}

/// The properties of the torrent engine daemon.
#[derive(Debug, Display, Clone, Serialize, Deserialize, PartialEq)]
#[display("url: {}", url)]
pub struct EngineProperties {
    /// The base url of the engine daemon api.
    #[serde(default = "DEFAULT_ENGINE_URL")]
    pub url: String,
}

impl Default for EngineProperties {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENGINE_URL(),
        }
    }
}
