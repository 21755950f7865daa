use crate::admission::{Reservation, reserve};

use kt_core::{
    Clock, Cooldown, NEVER_KICKED, Result, SystemClock, ThrottleDecision, ThrottleKey,
    TimestampStore,
};

use std::sync::Arc;

use log::{error, info, warn};

/// Per-admin user-kick throttle.
pub struct UserKickThrottle {
    store: Arc<dyn TimestampStore>,
    clock: Arc<dyn Clock>,
}

impl UserKickThrottle {
    pub fn new(store: Arc<dyn TimestampStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TimestampStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Read-only check. An admin without a record is treated as never
    /// having kicked anyone.
    pub async fn check(
        &self,
        admin_username: &str,
        threshold: Cooldown,
    ) -> Result<ThrottleDecision> {
        let key = ThrottleKey::admin(admin_username);
        key.validate()?;

        let now = self.clock.now();
        let last_kick = self
            .store
            .get_timestamp(&key)
            .await
            .inspect_err(|e| error!("User kick throttle failed for {}: {}", admin_username, e))?
            .unwrap_or(NEVER_KICKED);

        let decision = ThrottleDecision::evaluate(last_kick, now, threshold);
        log_decision(admin_username, decision);

        Ok(decision)
    }

    /// Records a user kick performed by `admin_username` at `at`.
    ///
    /// The admin must have been provisioned.
    pub async fn record(&self, admin_username: &str, at: i64) -> Result<()> {
        let key = ThrottleKey::admin(admin_username);
        key.validate()?;

        self.store
            .set_timestamp(&key, at)
            .await
            .inspect_err(|e| error!("Recording user kick by {} failed: {}", admin_username, e))?;

        info!("Recorded user kick by {} at {}", admin_username, at);
        Ok(())
    }

    /// Check, record and kick as one admission step.
    ///
    /// The cooldown slot is claimed before `kick` runs, so two sessions of the
    /// same admin cannot both get through. `kick` reports whether the kick
    /// actually happened; if it did not, the previous kick time is restored.
    pub async fn attempt<F, Fut>(
        &self,
        admin_username: &str,
        threshold: Cooldown,
        kick: F,
    ) -> Result<ThrottleDecision>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        let key = ThrottleKey::admin(admin_username);
        key.validate()?;

        let reservation = reserve(self.store.as_ref(), self.clock.as_ref(), &key, threshold)
            .await
            .inspect_err(|e| error!("User kick throttle failed for {}: {}", admin_username, e))?;

        let (previous, at) = match reservation {
            Reservation::Denied(decision) => {
                log_decision(admin_username, decision);
                return Ok(decision);
            }
            Reservation::Reserved { previous, at } => (previous, at),
        };

        log_decision(admin_username, ThrottleDecision::Permitted);

        if kick().await {
            info!("Recorded user kick by {} at {}", admin_username, at);
            return Ok(ThrottleDecision::Permitted);
        }

        let restored = previous.unwrap_or(NEVER_KICKED);
        let released = self
            .store
            .compare_and_set(&key, Some(at), restored)
            .await
            .inspect_err(|e| {
                error!(
                    "Releasing cooldown for {} after a skipped kick failed: {}",
                    admin_username, e
                )
            })?;

        if released {
            info!(
                "User kick by {} did not happen, cooldown released",
                admin_username
            );
        } else {
            warn!(
                "User kick by {} did not happen, but its cooldown was overwritten before release",
                admin_username
            );
        }

        Ok(ThrottleDecision::Permitted)
    }
}

fn log_decision(admin_username: &str, decision: ThrottleDecision) {
    match decision {
        ThrottleDecision::Permitted => info!(
            "Action kicking user by {} is permitted by throttling",
            admin_username
        ),
        ThrottleDecision::Denied { wait_seconds } => info!(
            "Action kicking user by {} is denied by throttling, wait {}s",
            admin_username, wait_seconds
        ),
    }
}
