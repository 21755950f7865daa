use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    pub dir: String,
    /// Log to `<config dir>/<dir>/<file>` instead of stdout when set.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
        }
    }
}
