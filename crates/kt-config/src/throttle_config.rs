use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Threshold constraints
pub const MIN_THRESHOLD: i64 = 1;
pub const MAX_USER_KICK_THRESHOLD_SECS: i64 = 86_400;
pub const DEFAULT_USER_KICK_THRESHOLD_SECS: i64 = 20;

pub const MAX_GROUP_KICK_THRESHOLD_MINUTES: i64 = 1_440;
pub const DEFAULT_GROUP_KICK_THRESHOLD_MINUTES: i64 = 7;

/// Default cooldowns, used when a command does not pass its own threshold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Minimum seconds between two user kicks by the same admin
    pub user_kick_threshold_secs: i64,
    /// Minimum minutes between two kicks of the same gateway group
    pub group_kick_threshold_minutes: i64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            user_kick_threshold_secs: DEFAULT_USER_KICK_THRESHOLD_SECS,
            group_kick_threshold_minutes: DEFAULT_GROUP_KICK_THRESHOLD_MINUTES,
        }
    }
}

impl ThrottleConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_THRESHOLD..=MAX_USER_KICK_THRESHOLD_SECS).contains(&self.user_kick_threshold_secs)
        {
            return Err(ConfigError::throttle(format!(
                "throttle.user_kick_threshold_secs must be {}-{}, got {}",
                MIN_THRESHOLD, MAX_USER_KICK_THRESHOLD_SECS, self.user_kick_threshold_secs
            )));
        }

        if !(MIN_THRESHOLD..=MAX_GROUP_KICK_THRESHOLD_MINUTES)
            .contains(&self.group_kick_threshold_minutes)
        {
            return Err(ConfigError::throttle(format!(
                "throttle.group_kick_threshold_minutes must be {}-{}, got {}",
                MIN_THRESHOLD, MAX_GROUP_KICK_THRESHOLD_MINUTES, self.group_kick_threshold_minutes
            )));
        }

        Ok(())
    }
}
