use crate::{AdminRepository, GroupThrottleRepository};

use kt_core::{CoreError, Result as CoreResult, ThrottleKey, TimestampStore};

use async_trait::async_trait;
use sqlx::SqlitePool;

/// [`TimestampStore`] over the `admins` and `kick_group_throttling` tables.
///
/// Every operation is a single statement (plus, for a lost admin
/// compare-and-set, one existence probe), so nothing holds a connection
/// beyond the call.
#[derive(Clone)]
pub struct SqliteTimestampStore {
    pool: SqlitePool,
}

impl SqliteTimestampStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TimestampStore for SqliteTimestampStore {
    async fn get_timestamp(&self, key: &ThrottleKey) -> CoreResult<Option<i64>> {
        let time = match key {
            ThrottleKey::Admin(username) => {
                AdminRepository::find_last_user_kick_time(&self.pool, username).await?
            }
            ThrottleKey::Group { gateway, group } => {
                GroupThrottleRepository::find_last_kick_time(&self.pool, gateway, group).await?
            }
        };

        Ok(time)
    }

    async fn set_timestamp(&self, key: &ThrottleKey, value: i64) -> CoreResult<()> {
        match key {
            ThrottleKey::Admin(username) => {
                AdminRepository::update_last_user_kick_time(&self.pool, username, value).await?
            }
            ThrottleKey::Group { gateway, group } => {
                GroupThrottleRepository::upsert(&self.pool, gateway, group, value).await?
            }
        }

        Ok(())
    }

    async fn compare_and_set(
        &self,
        key: &ThrottleKey,
        expected: Option<i64>,
        value: i64,
    ) -> CoreResult<bool> {
        match (key, expected) {
            // Admin rows carry a credential hash and can only come from provisioning
            (ThrottleKey::Admin(_), None) => Err(CoreError::not_found(key)),
            (ThrottleKey::Admin(username), Some(expected)) => {
                let swapped = AdminRepository::compare_and_set_last_user_kick_time(
                    &self.pool, username, expected, value,
                )
                .await?;

                if !swapped
                    && AdminRepository::find_last_user_kick_time(&self.pool, username)
                        .await?
                        .is_none()
                {
                    return Err(CoreError::not_found(key));
                }

                Ok(swapped)
            }
            (ThrottleKey::Group { gateway, group }, None) => {
                Ok(GroupThrottleRepository::insert_if_absent(&self.pool, gateway, group, value)
                    .await?)
            }
            (ThrottleKey::Group { gateway, group }, Some(expected)) => Ok(
                GroupThrottleRepository::compare_and_set(
                    &self.pool, gateway, group, expected, value,
                )
                .await?,
            ),
        }
    }
}
