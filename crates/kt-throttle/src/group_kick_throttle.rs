use crate::admission::{Reservation, reserve};

use kt_core::{
    Clock, Cooldown, Result, SystemClock, ThrottleDecision, ThrottleKey, TimestampStore,
};

use std::sync::Arc;

use log::{error, info};

/// Per-(gateway, group) kick throttle. Checking and recording are one step.
pub struct GroupKickThrottle {
    store: Arc<dyn TimestampStore>,
    clock: Arc<dyn Clock>,
}

impl GroupKickThrottle {
    pub fn new(store: Arc<dyn TimestampStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TimestampStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Permits the kick if the group's cooldown has elapsed and records the
    /// kick time in the same atomic step. Denials leave the store untouched.
    ///
    /// A group with no record counts as never kicked: it is permitted and
    /// its record is created, so the next check is throttled.
    pub async fn check_and_record(
        &self,
        gateway: &str,
        group: &str,
        threshold: Cooldown,
    ) -> Result<ThrottleDecision> {
        let key = ThrottleKey::group(gateway, group);
        key.validate()?;

        let reservation = reserve(self.store.as_ref(), self.clock.as_ref(), &key, threshold)
            .await
            .inspect_err(|e| {
                error!(
                    "Group kick throttle failed for {} on {}: {}",
                    group, gateway, e
                )
            })?;

        let decision = match reservation {
            Reservation::Reserved { previous: None, at } => {
                info!(
                    "Group {} on {} had no throttle record; kick permitted, recorded at {}",
                    group, gateway, at
                );
                ThrottleDecision::Permitted
            }
            Reservation::Reserved { at, .. } => {
                info!(
                    "Kicking group {} from {} is permitted by throttling, recorded at {}",
                    group, gateway, at
                );
                ThrottleDecision::Permitted
            }
            Reservation::Denied(decision) => {
                info!(
                    "Kicking group {} from {} is not permitted by throttling, wait {}s",
                    group,
                    gateway,
                    decision.wait_seconds()
                );
                decision
            }
        };

        Ok(decision)
    }
}
