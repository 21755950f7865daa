use crate::{ErrorLocation, ThrottleKey};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("No record for {key} {location}")]
    NotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Timestamp store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(key: &ThrottleKey) -> Self {
        CoreError::NotFound {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        CoreError::StoreUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, CoreError::StoreUnavailable { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
