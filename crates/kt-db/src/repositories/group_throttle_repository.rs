use crate::error::Result as DbErrorResult;

use kt_core::GroupThrottleRecord;

pub struct GroupThrottleRepository;

impl GroupThrottleRepository {
    /// Inserts the record unless the (gateway, group) pair already exists.
    pub async fn create_if_absent<'e, E>(
        executor: E,
        record: &GroupThrottleRecord,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        Self::insert_if_absent(executor, &record.gateway, &record.group, record.last_kick_time)
            .await
    }

    pub async fn find<'e, E>(
        executor: E,
        gateway: &str,
        group: &str,
    ) -> DbErrorResult<Option<GroupThrottleRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let time = Self::find_last_kick_time(executor, gateway, group).await?;

        Ok(time.map(|last_kick_time| GroupThrottleRecord {
            gateway: gateway.to_string(),
            group: group.to_string(),
            last_kick_time,
        }))
    }

    pub async fn find_last_kick_time<'e, E>(
        executor: E,
        gateway: &str,
        group: &str,
    ) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let time = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT time FROM kick_group_throttling
                WHERE gateway = ? AND group_name = ?
                "#,
        )
        .bind(gateway)
        .bind(group)
        .fetch_optional(executor)
        .await?;

        Ok(time)
    }

    pub async fn insert_if_absent<'e, E>(
        executor: E,
        gateway: &str,
        group: &str,
        time: i64,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO kick_group_throttling (gateway, group_name, time)
                VALUES (?, ?, ?)
                ON CONFLICT(gateway, group_name) DO NOTHING
                "#,
        )
        .bind(gateway)
        .bind(group)
        .bind(time)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn upsert<'e, E>(
        executor: E,
        gateway: &str,
        group: &str,
        time: i64,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kick_group_throttling (gateway, group_name, time)
                VALUES (?, ?, ?)
                ON CONFLICT(gateway, group_name) DO UPDATE SET time = excluded.time
                "#,
        )
        .bind(gateway)
        .bind(group)
        .bind(time)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn compare_and_set<'e, E>(
        executor: E,
        gateway: &str,
        group: &str,
        expected: i64,
        time: i64,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE kick_group_throttling
                SET time = ?
                WHERE gateway = ? AND group_name = ? AND time = ?
                "#,
        )
        .bind(time)
        .bind(gateway)
        .bind(group)
        .bind(expected)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
