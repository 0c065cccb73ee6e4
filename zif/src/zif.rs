use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use derive_more::Display;
use log::info;
use thiserror::Error;

use zif_core::core::config::{ConfigError, ZifProperties};
use zif_core::core::session::StreamSessionManager;
use zif_core::core::torrents;
use zif_core::core::torrents::HttpTorrentEngine;
use zif_logging::{LogSettings, ZifLogger};

const DEFAULT_LOG_LEVEL: &str = "info";

/// The errors which can occur while creating the [Zif] instance.
#[derive(Debug, Error)]
pub enum ZifError {
    #[error("failed to initialize the logger, {0}")]
    Logging(zif_logging::Error),
    #[error("failed to load the configuration, {0}")]
    Config(ConfigError),
    #[error("failed to create the torrent engine, {0}")]
    Engine(torrents::Error),
}

impl From<zif_logging::Error> for ZifError {
    fn from(e: zif_logging::Error) -> Self {
        ZifError::Logging(e)
    }
}

impl From<ConfigError> for ZifError {
    fn from(e: ConfigError) -> Self {
        ZifError::Config(e)
    }
}

impl From<torrents::Error> for ZifError {
    fn from(e: torrents::Error) -> Self {
        ZifError::Engine(e)
    }
}

/// The command line arguments of the stream bridge.
#[derive(Debug, Clone, Display, Parser)]
#[command(name = "zif-stream", version = zif_core::VERSION)]
#[display("socket: {}, config: {:?}, engine_url: {:?}", socket, config, engine_url)]
pub struct ZifArgs {
    /// The local socket/pipe name of the presentation layer.
    pub socket: String,
    /// The config file to use instead of the `application.yml` within the working directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the directory in which new torrents are downloaded.
    #[arg(long)]
    pub download_directory: Option<PathBuf>,
    /// Override the base url of the torrent engine daemon.
    #[arg(long)]
    pub engine_url: Option<String>,
    /// The root log level, e.g. `debug`.
    #[arg(long, default_value_t = DEFAULT_LOG_LEVEL.to_string())]
    pub log_level: String,
    /// The `log4rs` yaml config to load instead of the default appenders.
    #[arg(long)]
    pub log_config: Option<PathBuf>,
    /// Write the logs also to the given file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Don't initialize a logger for the process.
    #[arg(long, default_value_t = false)]
    pub disable_logger: bool,
}

/// The stream bridge instance which owns the stream session of the process.
#[derive(Debug)]
pub struct Zif {
    properties: ZifProperties,
    manager: StreamSessionManager,
    _logger: Option<ZifLogger>,
}

impl Zif {
    /// Create a new stream bridge instance from the given arguments.
    /// The arguments take precedence over the values of the config file.
    pub fn new(args: ZifArgs) -> Result<Self, ZifError> {
        let logger = if args.disable_logger {
            None
        } else {
            Some(Self::create_logger(&args)?)
        };

        info!("Creating new zif instance with {}", args);
        let mut properties = match &args.config {
            Some(path) => ZifProperties::from_path(path)?,
            None => ZifProperties::new_auto(),
        };
        if let Some(directory) = args.download_directory {
            properties.stream.download_directory = directory;
        }
        if let Some(url) = args.engine_url {
            properties.engine.url = url;
        }
        info!("Using zif properties {}", properties);

        let engine = HttpTorrentEngine::new(properties.engine.url.as_str())?;
        let manager = StreamSessionManager::new(Arc::new(engine), properties.stream.clone());

        Ok(Self {
            properties,
            manager,
            _logger: logger,
        })
    }

    /// Returns the stream session manager of the instance.
    pub fn manager(&self) -> &StreamSessionManager {
        &self.manager
    }

    /// Returns the effective properties of the instance.
    pub fn properties(&self) -> &ZifProperties {
        &self.properties
    }

    /// Close the active stream of the instance.
    pub async fn shutdown(&self) {
        info!("Zif instance is shutting down");
        self.manager.stop().await;
    }

    fn create_logger(args: &ZifArgs) -> Result<ZifLogger, ZifError> {
        let settings = LogSettings {
            config_file: args.log_config.clone(),
            log_file: args.log_file.clone(),
            ..LogSettings::new(args.log_level.as_str())?
        };

        Ok(ZifLogger::init(&settings)?)
    }
}
