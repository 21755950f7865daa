use crate::{CliError, Result};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Initialize logger with fern
///
/// Console output goes to stderr; stdout carries the JSON result.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: kt_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> Result<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339_seconds(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                ))
            })
            .chain(std::io::stderr())
    } else {
        // Plain output for cron jobs and captured stderr
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stderr())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}
