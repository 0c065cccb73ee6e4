use crate::{Error, Result};
use log::{info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

const STDERR_PATTERN: &str =
    "{d(%H:%M:%S%.3f)} {h({l:>5.5})} [{T:>12.12}] \x1B[36m{t:<32.32}\x1B[0m : {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:>5.5} [{T:>12.12}] {t:<32.32} : {m}{n}";
const STDERR: &str = "stderr";
const LOG_FILE: &str = "log_file";
/// The size at which the log file is rolled over into `<name>.1.log`.
const LOG_FILE_ROLL_SIZE: u64 = 5 * 1024 * 1024;
const LOG_FILE_HISTORY: u32 = 3;
/// The targets of the stream bridge itself, which log at the requested level.
const BRIDGE_TARGETS: [&str; 2] = ["zif_core", "zif_stream"];
/// The dependencies which only log warnings, unless tracing has been requested.
const DEPENDENCY_TARGETS: [&str; 5] = ["axum", "hyper", "hyper_util", "mio", "reqwest"];

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// The logging settings of the stream bridge process.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    /// The level of the bridge log targets.
    pub level: LevelFilter,
    /// The `log4rs` yaml config which replaces the generated config.
    pub config_file: Option<PathBuf>,
    /// The file to which the logs are written next to stderr.
    pub log_file: Option<PathBuf>,
}

impl LogSettings {
    /// Create the settings for the given textual log level, e.g. `debug`.
    pub fn new(level: &str) -> Result<Self> {
        let level = LevelFilter::from_str(level.trim())
            .map_err(|_| Error::InvalidLevel(level.to_string()))?;

        Ok(Self {
            level,
            config_file: None,
            log_file: None,
        })
    }

    /// Returns the level of the dependency targets for these settings.
    fn dependency_level(&self) -> LevelFilter {
        if self.level == LevelFilter::Trace {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn.min(self.level)
        }
    }
}

/// The process wide logger of the stream bridge.
/// Only one logger can be active within a process.
#[derive(Debug)]
pub struct ZifLogger {
    handle: Handle,
}

impl ZifLogger {
    /// Initialize the process logger from the given settings.
    ///
    /// It returns [Error::AlreadyInitialized] when a logger was already created within this process.
    pub fn init(settings: &LogSettings) -> Result<Self> {
        let config = match &settings.config_file {
            Some(path) => log4rs::config::load_config_file(path, Default::default())
                .map_err(|e| Error::InvalidConfig(e.to_string()))?,
            None => generate_config(settings)?,
        };
        if INITIALIZED.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyInitialized);
        }

        let handle =
            log4rs::init_config(config).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        info!("Logging at level {}", settings.level);
        Ok(Self { handle })
    }

    /// Returns the most verbose level which is being logged.
    pub fn max_level(&self) -> LevelFilter {
        self.handle.max_log_level()
    }
}

/// Generate the config which logs to stderr, and to the log file when one has been given.
/// Stdout is left untouched.
fn generate_config(settings: &LogSettings) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let mut appenders = vec![Appender::builder().build(STDERR, Box::new(stderr))];
    if let Some(path) = &settings.log_file {
        appenders.push(log_file_appender(path)?);
    }
    let appender_names: Vec<String> = appenders.iter().map(|e| e.name().to_string()).collect();

    let loggers = BRIDGE_TARGETS
        .iter()
        .map(|target| (*target, settings.level))
        .chain(
            DEPENDENCY_TARGETS
                .iter()
                .map(|target| (*target, settings.dependency_level())),
        )
        .map(|(target, level)| Logger::builder().build(target, level));

    Config::builder()
        .appenders(appenders)
        .loggers(loggers)
        .build(
            Root::builder()
                .appenders(appender_names)
                .build(settings.dependency_level()),
        )
        .map_err(|e| Error::InvalidConfig(e.to_string()))
}

fn log_file_appender(path: &Path) -> Result<Appender> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let history_pattern = path.with_extension("{}.log");
    let roller = FixedWindowRoller::builder()
        .base(1)
        .build(&history_pattern.to_string_lossy(), LOG_FILE_HISTORY)
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(LOG_FILE_ROLL_SIZE)),
        Box::new(roller),
    );
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .append(false)
        .build(path, Box::new(policy))?;

    Ok(Appender::builder().build(LOG_FILE, Box::new(appender)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_log_settings_new() {
        let result = LogSettings::new(" Debug ").unwrap();

        assert_eq!(
            LogSettings {
                level: LevelFilter::Debug,
                config_file: None,
                log_file: None,
            },
            result
        );
    }

    #[test]
    fn test_log_settings_invalid_level() {
        let result = LogSettings::new("loud");

        assert_eq!(Err(Error::InvalidLevel("loud".to_string())), result);
    }

    #[test]
    fn test_dependency_level() {
        let mut settings = LogSettings::new("error").unwrap();
        assert_eq!(LevelFilter::Error, settings.dependency_level());

        settings.level = LevelFilter::Debug;
        assert_eq!(LevelFilter::Warn, settings.dependency_level());

        settings.level = LevelFilter::Trace;
        assert_eq!(LevelFilter::Debug, settings.dependency_level());
    }

    #[test]
    fn test_generate_config() {
        let temp_dir = tempdir().unwrap();
        let settings = LogSettings {
            level: LevelFilter::Info,
            config_file: None,
            log_file: Some(temp_dir.path().join("logs").join("zif.log")),
        };

        let config = generate_config(&settings).unwrap();

        let appenders: Vec<_> = config.appenders().iter().map(|e| e.name()).collect();
        assert_eq!(vec![STDERR, LOG_FILE], appenders);
        assert_eq!(LevelFilter::Warn, config.root().level());
        let zif_core = config
            .loggers()
            .iter()
            .find(|e| e.name() == "zif_core")
            .expect("expected a logger for the bridge targets");
        assert_eq!(LevelFilter::Info, zif_core.level());
        assert!(
            temp_dir.path().join("logs").exists(),
            "expected the log directory to have been created"
        );
    }

    #[test]
    fn test_init() {
        let temp_dir = tempdir().unwrap();
        let config_file = temp_dir.path().join("log4rs.yml");
        fs::write(
            &config_file,
            "appenders:\n  stderr:\n    kind: console\n    target: stderr\nroot:\n  level: trace\n  appenders:\n    - stderr\n",
        )
        .unwrap();
        let settings = LogSettings {
            level: LevelFilter::Info,
            config_file: Some(config_file),
            log_file: None,
        };

        let logger = ZifLogger::init(&settings).expect("expected a logger");
        assert_eq!(LevelFilter::Trace, logger.max_level());

        let result = ZifLogger::init(&settings);
        assert_eq!(
            Err(Error::AlreadyInitialized),
            result.map(|_| ())
        );
    }
}
