//! Cooldown-based admission control for kick actions.
//!
//! Both throttles share one [`TimestampStore`](kt_core::TimestampStore) and
//! record through compare-and-set, so concurrent callers racing on the same
//! key see at most one permitted kick per cooldown window.

mod admission;
pub mod group_kick_throttle;
pub mod user_kick_throttle;

pub use group_kick_throttle::GroupKickThrottle;
pub use user_kick_throttle::UserKickThrottle;

#[cfg(test)]
mod tests;

/// Compare-and-set rounds before giving up on a contended key.
const MAX_RESERVE_ATTEMPTS: usize = 5;
