use crate::{NEVER_KICKED, ThrottleKey};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupThrottleRecord {
    pub gateway: String,
    pub group: String,
    pub last_kick_time: i64,
}

impl GroupThrottleRecord {
    pub fn new(gateway: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
            group: group.into(),
            last_kick_time: NEVER_KICKED,
        }
    }

    pub fn key(&self) -> ThrottleKey {
        ThrottleKey::group(&self.gateway, &self.group)
    }
}
