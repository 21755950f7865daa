mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod seed_file;
mod throttle_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_file::{SeedAdmin, SeedFile, SeedGroup};
pub use throttle_config::{
    DEFAULT_GROUP_KICK_THRESHOLD_MINUTES, DEFAULT_USER_KICK_THRESHOLD_SECS,
    MAX_GROUP_KICK_THRESHOLD_MINUTES, MAX_USER_KICK_THRESHOLD_SECS, MIN_THRESHOLD, ThrottleConfig,
};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "KT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kick-throttle";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_DATABASE_FILENAME: &str = "vpnmapp.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
