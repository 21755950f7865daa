use crate::MAX_RESERVE_ATTEMPTS;

use kt_core::{
    Clock, Cooldown, CoreError, NEVER_KICKED, Result, ThrottleDecision, ThrottleKey,
    TimestampStore,
};

use log::debug;

pub(crate) enum Reservation {
    /// The cooldown has elapsed and `at` is now the stored time.
    Reserved { previous: Option<i64>, at: i64 },
    Denied(ThrottleDecision),
}

/// Decides and, when permitted, records `now` for `key` atomically.
///
/// A lost compare-and-set means another caller recorded first; the key is
/// re-read and the decision recomputed against the new time.
pub(crate) async fn reserve(
    store: &dyn TimestampStore,
    clock: &dyn Clock,
    key: &ThrottleKey,
    cooldown: Cooldown,
) -> Result<Reservation> {
    for attempt in 1..=MAX_RESERVE_ATTEMPTS {
        let now = clock.now();
        let previous = store.get_timestamp(key).await?;

        let decision = ThrottleDecision::evaluate(previous.unwrap_or(NEVER_KICKED), now, cooldown);
        if !decision.is_permitted() {
            return Ok(Reservation::Denied(decision));
        }

        if store.compare_and_set(key, previous, now).await? {
            return Ok(Reservation::Reserved { previous, at: now });
        }

        debug!("Lost compare-and-set on {} (attempt {})", key, attempt);
    }

    Err(CoreError::store_unavailable(format!(
        "{} changed {} times while recording a kick",
        key, MAX_RESERVE_ATTEMPTS
    )))
}
