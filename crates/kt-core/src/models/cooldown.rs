use crate::{CoreError, Result};

use std::fmt;

const SECONDS_PER_MINUTE: i64 = 60;

/// Minimum time that must pass between two permitted kicks on the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    seconds: i64,
}

impl Cooldown {
    #[track_caller]
    pub fn from_secs(seconds: i64) -> Result<Self> {
        if seconds <= 0 {
            return Err(CoreError::invalid_input(format!(
                "threshold must be positive, got {seconds}s"
            )));
        }
        Ok(Self { seconds })
    }

    #[track_caller]
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if minutes <= 0 {
            return Err(CoreError::invalid_input(format!(
                "threshold must be positive, got {minutes}min"
            )));
        }
        let seconds = minutes.checked_mul(SECONDS_PER_MINUTE).ok_or_else(|| {
            CoreError::invalid_input(format!("threshold of {minutes}min is out of range"))
        })?;
        Ok(Self { seconds })
    }

    pub fn as_secs(&self) -> i64 {
        self.seconds
    }
}

impl fmt::Display for Cooldown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}
