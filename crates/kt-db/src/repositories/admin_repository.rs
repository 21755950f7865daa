use crate::{DbError, error::Result as DbErrorResult};

use kt_core::{AdminRecord, ErrorLocation};

use std::panic::Location;

pub struct AdminRepository;

impl AdminRepository {
    /// Inserts the admin unless the username is already present.
    ///
    /// Returns `true` when a row was created. Existing rows, including their
    /// last kick time, are left alone.
    pub async fn create_if_absent<'e, E>(executor: E, admin: &AdminRecord) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO admins (username, hash, last_user_kick_time)
                VALUES (?, ?, ?)
                ON CONFLICT(username) DO NOTHING
                "#,
        )
        .bind(&admin.username)
        .bind(&admin.hash)
        .bind(admin.last_user_kick_time)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn find_by_username<'e, E>(
        executor: E,
        username: &str,
    ) -> DbErrorResult<Option<AdminRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, (String, String, i64)>(
            r#"
                SELECT username, hash, last_user_kick_time
                FROM admins
                WHERE username = ?
                "#,
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(|(username, hash, last_user_kick_time)| AdminRecord {
            username,
            hash,
            last_user_kick_time,
        }))
    }

    pub async fn find_last_user_kick_time<'e, E>(
        executor: E,
        username: &str,
    ) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let time = sqlx::query_scalar::<_, i64>(
            "SELECT last_user_kick_time FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;

        Ok(time)
    }

    pub async fn update_last_user_kick_time<'e, E>(
        executor: E,
        username: &str,
        time: i64,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE admins SET last_user_kick_time = ? WHERE username = ?")
            .bind(time)
            .bind(username)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RecordNotFound {
                key: format!("admin '{}'", username),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Moves the last kick time from `expected` to `time` in one statement.
    ///
    /// Returns `false` if the row is missing or holds another value.
    pub async fn compare_and_set_last_user_kick_time<'e, E>(
        executor: E,
        username: &str,
        expected: i64,
        time: i64,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE admins
                SET last_user_kick_time = ?
                WHERE username = ? AND last_user_kick_time = ?
                "#,
        )
        .bind(time)
        .bind(username)
        .bind(expected)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
