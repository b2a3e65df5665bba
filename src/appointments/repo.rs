use sqlx::{Sqlite, SqliteExecutor};
use time::PrimitiveDateTime;

use crate::appointments::repo_types::Appointment;

impl Appointment {
    pub async fn create<'e, E>(
        db: E,
        user_id: i64,
        doctor_id: i64,
        time: PrimitiveDateTime,
    ) -> Result<Appointment, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Appointment>(
            r#"
            INSERT INTO appointments (user_id, doctor_id, time)
            VALUES (?, ?, ?)
            RETURNING id, user_id, doctor_id, time
            "#,
        )
        .bind(user_id)
        .bind(doctor_id)
        .bind(time)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id<'e, E>(db: E, id: i64) -> Result<Option<Appointment>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Appointment>(
            r#"
            SELECT id, user_id, doctor_id, time
            FROM appointments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// No ORDER BY: callers get the store's natural order.
    pub async fn list_by_user<'e, E>(db: E, user_id: i64) -> Result<Vec<Appointment>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Appointment>(
            r#"
            SELECT id, user_id, doctor_id, time
            FROM appointments
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Overwrites the timestamp only. `None` when the id does not exist.
    pub async fn update_time<'e, E>(
        db: E,
        id: i64,
        time: PrimitiveDateTime,
    ) -> Result<Option<Appointment>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Appointment>(
            r#"
            UPDATE appointments
            SET time = ?
            WHERE id = ?
            RETURNING id, user_id, doctor_id, time
            "#,
        )
        .bind(time)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Returns whether a row was removed.
    pub async fn delete<'e, E>(db: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let res = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
