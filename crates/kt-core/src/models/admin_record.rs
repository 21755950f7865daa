use crate::NEVER_KICKED;

use serde::{Deserialize, Serialize};

/// An operator allowed to issue kicks.
///
/// `hash` is stored as provisioned and never verified here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub username: String,
    pub hash: String,
    pub last_user_kick_time: i64,
}

impl AdminRecord {
    pub fn new(username: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hash: hash.into(),
            last_user_kick_time: NEVER_KICKED,
        }
    }
}
