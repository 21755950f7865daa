use kt_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record not found: {key} {location}")]
    RecordNotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Invalid record: {message} {location}")]
    InvalidRecord {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for CoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            DbError::RecordNotFound { key, .. } => CoreError::NotFound { key, location },
            DbError::InvalidRecord { message, .. } => CoreError::InvalidInput { message, location },
            other => CoreError::StoreUnavailable {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
