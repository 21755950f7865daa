use crate::{CoreError, Result};

use std::fmt;

/// Identifies one cooldown window in the timestamp store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThrottleKey {
    /// Last user kick issued by an admin.
    Admin(String),
    /// Last kick of a group on a gateway.
    Group { gateway: String, group: String },
}

impl ThrottleKey {
    pub fn admin(username: impl Into<String>) -> Self {
        ThrottleKey::Admin(username.into())
    }

    pub fn group(gateway: impl Into<String>, group: impl Into<String>) -> Self {
        ThrottleKey::Group {
            gateway: gateway.into(),
            group: group.into(),
        }
    }

    /// Rejects keys with empty (or whitespace-only) identifiers.
    #[track_caller]
    pub fn validate(&self) -> Result<()> {
        match self {
            ThrottleKey::Admin(username) => require_non_blank("admin username", username),
            ThrottleKey::Group { gateway, group } => {
                require_non_blank("gateway", gateway)?;
                require_non_blank("group", group)
            }
        }
    }
}

#[track_caller]
fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}

impl fmt::Display for ThrottleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrottleKey::Admin(username) => write!(f, "admin '{username}'"),
            ThrottleKey::Group { gateway, group } => {
                write!(f, "group '{group}' on gateway '{gateway}'")
            }
        }
    }
}
