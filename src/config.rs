//! Environment configuration and logger setup.
//!
//! Values come from the process environment after loading `.env`.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "IPV4_INFO_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "IPV4_INFO_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs yaml file, used when it exists.
    pub log_config: String,
    /// Level of the stderr logger used without a log4rs file.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, unknown or bad values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.is_empty()) {
            config.log_config = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(&level) {
                Ok(level) => config.log_level = level,
                Err(_) => eprintln!("Ignoring {ENV_LOG_LEVEL}={level:?}, not a log level"),
            }
        }
        config
    }

    /// Start log4rs from the yaml file, or a stderr logger when it is missing.
    pub fn init_logging(&self) -> Result<(), Box<dyn Error>> {
        if Path::new(&self.log_config).exists() {
            log4rs::init_file(&self.log_config, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {}: {e}", self.log_config))?;
            log::debug!("Logging configured from {}", self.log_config);
            return Ok(());
        }

        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{h({l})} {M} - {m}{n}")))
            .build();
        let log_config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(self.log_level))?;
        log4rs::init_config(log_config)?;
        log::debug!("No {} found, logging to stderr", self.log_config);
        Ok(())
    }
}
