
use kt_core::{ManualClock, TimestampStore};
use kt_db::{DatabaseConnector, SqliteTimestampStore};

use std::sync::Arc;

use sqlx::SqlitePool;

pub(crate) const NOW: i64 = 1_700_000_000;

pub(crate) struct Harness {
    pub(crate) pool: SqlitePool,
    pub(crate) store: Arc<dyn TimestampStore>,
    pub(crate) clock: Arc<ManualClock>,
}

pub(crate) async fn create_harness() -> Harness {
    let pool = DatabaseConnector::in_memory().connect().await.unwrap();
    let store: Arc<dyn TimestampStore> = Arc::new(SqliteTimestampStore::new(pool.clone()));
    Harness {
        pool,
        store,
        clock: Arc::new(ManualClock::new(NOW)),
    }
}
