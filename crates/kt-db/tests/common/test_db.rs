use kt_db::DatabaseConnector;

use std::path::Path;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    DatabaseConnector::in_memory()
        .connect()
        .await
        .expect("Failed to create test pool")
}

/// Creates a file-backed pool with several connections, for concurrency tests
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    DatabaseConnector::new(dir.join("throttle.db"))
        .max_connections(8)
        .connect()
        .await
        .expect("Failed to create file pool")
}

/// Inserts an admin row with a given last kick time
pub async fn insert_admin_at(pool: &SqlitePool, username: &str, time: i64) {
    // Use sqlx::query directly so fixtures don't depend on the code under test
    sqlx::query("INSERT INTO admins (username, hash, last_user_kick_time) VALUES (?, ?, ?)")
        .bind(username)
        .bind("test-hash")
        .bind(time)
        .execute(pool)
        .await
        .expect("Failed to insert admin");
}

/// Inserts a gateway/group row with a given last kick time
pub async fn insert_group_at(pool: &SqlitePool, gateway: &str, group: &str, time: i64) {
    sqlx::query("INSERT INTO kick_group_throttling (gateway, group_name, time) VALUES (?, ?, ?)")
        .bind(gateway)
        .bind(group)
        .bind(time)
        .execute(pool)
        .await
        .expect("Failed to insert group");
}

/// Reads a group's stored time without going through the repositories
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
