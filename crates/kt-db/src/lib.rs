pub mod connection;
pub mod error;
pub mod provisioning;
pub mod repositories;
pub mod sqlite_timestamp_store;

pub use connection::database_connector::{DatabaseConnector, MIGRATOR};
pub use error::{DbError, Result};
pub use provisioning::{ProvisionSummary, provision};
pub use repositories::admin_repository::AdminRepository;
pub use repositories::group_throttle_repository::GroupThrottleRepository;
pub use sqlite_timestamp_store::SqliteTimestampStore;
