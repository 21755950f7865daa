use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] kt_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] kt_db::DbError),

    #[error("{0}")]
    Throttle(#[from] kt_core::CoreError),

    #[error("Failed to create directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
