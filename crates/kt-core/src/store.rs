use crate::{Result, ThrottleKey};

use async_trait::async_trait;

/// Durable last-action timestamps, keyed by admin or by gateway/group.
///
/// Implementations map their own failures to
/// [`CoreError::StoreUnavailable`](crate::CoreError::StoreUnavailable) and
/// missing admin rows on writes to [`CoreError::NotFound`](crate::CoreError::NotFound).
#[async_trait]
pub trait TimestampStore: Send + Sync {
    /// Last recorded action time, `None` when the key has no record.
    async fn get_timestamp(&self, key: &ThrottleKey) -> Result<Option<i64>>;

    /// Unconditionally records `value`.
    ///
    /// Group keys are upserted. Admin keys must already exist.
    async fn set_timestamp(&self, key: &ThrottleKey, value: i64) -> Result<()>;

    /// Atomically writes `value` only if the stored timestamp still equals
    /// `expected`. `expected == None` means "create the record if absent".
    ///
    /// Returns `false` when another writer got there first.
    async fn compare_and_set(
        &self,
        key: &ThrottleKey,
        expected: Option<i64>,
        value: i64,
    ) -> Result<bool>;
}
