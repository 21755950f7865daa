use crate::{DbError, Result};

use kt_core::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

enum Target {
    File(PathBuf),
    Memory,
}

/// Opens the SQLite pool backing the timestamp store and brings its schema up to date.
pub struct DatabaseConnector {
    target: Target,
    max_connections: u32,
}

impl DatabaseConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Private in-memory database. Limited to one connection, since every
    /// new connection would see its own empty database.
    pub fn in_memory() -> Self {
        Self {
            target: Target::Memory,
            max_connections: 1,
        }
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        if let Target::File(_) = self.target {
            self.max_connections = max_connections.max(1);
        }
        self
    }

    pub async fn connect(&self) -> Result<SqlitePool> {
        let pool = match &self.target {
            Target::File(path) => {
                // Create directory if it doesn't exist
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| DbError::Initialization {
                            message: format!(
                                "Failed to create database directory {}: {}",
                                parent.display(),
                                e
                            ),
                            location: ErrorLocation::from(Location::caller()),
                        })?;
                }

                info!("Connecting to database: {}", path.display());

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(BUSY_TIMEOUT);

                SqlitePoolOptions::new()
                    .max_connections(self.max_connections)
                    .connect_with(options)
                    .await?
            }
            Target::Memory => {
                let options = SqliteConnectOptions::new()
                    .filename(":memory:")
                    .create_if_missing(true);

                // Dropping the only connection would drop the database with it
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
        };

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        debug!("Running database migrations...");

        MIGRATOR
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Migrations complete");
        Ok(())
    }
}
