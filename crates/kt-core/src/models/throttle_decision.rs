use crate::Cooldown;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Outcome of a throttle check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    Permitted,
    Denied { wait_seconds: i64 },
}

impl ThrottleDecision {
    /// Fixed-window cooldown rule: permitted once `now - last_kick >= cooldown`.
    ///
    /// A `last_kick` later than `now` counts as zero elapsed time, so the
    /// reported wait never exceeds the cooldown itself.
    pub fn evaluate(last_kick: i64, now: i64, cooldown: Cooldown) -> Self {
        let elapsed = now.saturating_sub(last_kick).max(0);
        let threshold = cooldown.as_secs();

        if elapsed >= threshold {
            ThrottleDecision::Permitted
        } else {
            ThrottleDecision::Denied {
                wait_seconds: threshold - elapsed,
            }
        }
    }

    pub fn is_permitted(&self) -> bool {
        matches!(self, ThrottleDecision::Permitted)
    }

    pub fn wait_seconds(&self) -> i64 {
        match self {
            ThrottleDecision::Permitted => 0,
            ThrottleDecision::Denied { wait_seconds } => *wait_seconds,
        }
    }
}

impl Serialize for ThrottleDecision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ThrottleDecision", 2)?;
        state.serialize_field("permitted", &self.is_permitted())?;
        state.serialize_field("wait_seconds", &self.wait_seconds())?;
        state.end()
    }
}
