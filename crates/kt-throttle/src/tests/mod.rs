mod group_kick_throttle;

use kt_core::{CoreError, Result, ThrottleKey, TimestampStore};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-memory store following the same key rules as the SQLite one.
#[derive(Default)]
pub(crate) struct MemoryStore {
    times: Mutex<HashMap<ThrottleKey, i64>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub(crate) fn with(entries: &[(ThrottleKey, i64)]) -> Self {
        let store = Self::default();
        store
            .times
            .lock()
            .unwrap()
            .extend(entries.iter().cloned());
        store
    }

    pub(crate) fn time(&self, key: &ThrottleKey) -> Option<i64> {
        self.times.lock().unwrap().get(key).copied()
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimestampStore for MemoryStore {
    async fn get_timestamp(&self, key: &ThrottleKey) -> Result<Option<i64>> {
        Ok(self.time(key))
    }

    async fn set_timestamp(&self, key: &ThrottleKey, value: i64) -> Result<()> {
        let mut times = self.times.lock().unwrap();
        if matches!(key, ThrottleKey::Admin(_)) && !times.contains_key(key) {
            return Err(CoreError::not_found(key));
        }
        times.insert(key.clone(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn compare_and_set(
        &self,
        key: &ThrottleKey,
        expected: Option<i64>,
        value: i64,
    ) -> Result<bool> {
        let mut times = self.times.lock().unwrap();
        let current = times.get(key).copied();
        if matches!(key, ThrottleKey::Admin(_)) && current.is_none() {
            return Err(CoreError::not_found(key));
        }
        if current != expected {
            return Ok(false);
        }
        times.insert(key.clone(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Store that is always down.
pub(crate) struct FailingStore;

#[async_trait]
impl TimestampStore for FailingStore {
    async fn get_timestamp(&self, _key: &ThrottleKey) -> Result<Option<i64>> {
        Err(CoreError::store_unavailable("database is locked"))
    }

    async fn set_timestamp(&self, _key: &ThrottleKey, _value: i64) -> Result<()> {
        Err(CoreError::store_unavailable("database is locked"))
    }

    async fn compare_and_set(
        &self,
        _key: &ThrottleKey,
        _expected: Option<i64>,
        _value: i64,
    ) -> Result<bool> {
        Err(CoreError::store_unavailable("database is locked"))
    }
}

/// Store where some other writer always wins the compare-and-set.
pub(crate) struct ContendedStore;

#[async_trait]
impl TimestampStore for ContendedStore {
    async fn get_timestamp(&self, _key: &ThrottleKey) -> Result<Option<i64>> {
        Ok(Some(0))
    }

    async fn set_timestamp(&self, _key: &ThrottleKey, _value: i64) -> Result<()> {
        Ok(())
    }

    async fn compare_and_set(
        &self,
        _key: &ThrottleKey,
        _expected: Option<i64>,
        _value: i64,
    ) -> Result<bool> {
        Ok(false)
    }
}
