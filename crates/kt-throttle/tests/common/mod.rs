#![allow(dead_code)]

use kt_db::{DatabaseConnector, SqliteTimestampStore};

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

/// In-memory SQLite store with migrations run
pub async fn create_test_store() -> (SqlitePool, Arc<SqliteTimestampStore>) {
    let pool = DatabaseConnector::in_memory()
        .connect()
        .await
        .expect("Failed to create test pool");
    let store = Arc::new(SqliteTimestampStore::new(pool.clone()));
    (pool, store)
}

/// File-backed store with a multi-connection pool, so racing callers really overlap
pub async fn create_shared_store(dir: &Path) -> (SqlitePool, Arc<SqliteTimestampStore>) {
    let pool = DatabaseConnector::new(dir.join("throttle.db"))
        .max_connections(8)
        .connect()
        .await
        .expect("Failed to create file pool");
    let store = Arc::new(SqliteTimestampStore::new(pool.clone()));
    (pool, store)
}

pub async fn insert_admin_at(pool: &SqlitePool, username: &str, time: i64) {
    sqlx::query("INSERT INTO admins (username, hash, last_user_kick_time) VALUES (?, ?, ?)")
        .bind(username)
        .bind("test-hash")
        .bind(time)
        .execute(pool)
        .await
        .expect("Failed to insert admin");
}

pub async fn insert_group_at(pool: &SqlitePool, gateway: &str, group: &str, time: i64) {
    sqlx::query("INSERT INTO kick_group_throttling (gateway, group_name, time) VALUES (?, ?, ?)")
        .bind(gateway)
        .bind(group)
        .bind(time)
        .execute(pool)
        .await
        .expect("Failed to insert group");
}

pub async fn stored_group_time(pool: &SqlitePool, gateway: &str, group: &str) -> Option<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT time FROM kick_group_throttling WHERE gateway = ? AND group_name = ?",
    )
    .bind(gateway)
    .bind(group)
    .fetch_optional(pool)
    .await
    .expect("Failed to read group time")
}

pub async fn stored_admin_time(pool: &SqlitePool, username: &str) -> Option<i64> {
    sqlx::query_scalar::<_, i64>("SELECT last_user_kick_time FROM admins WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
        .expect("Failed to read admin time")
}
