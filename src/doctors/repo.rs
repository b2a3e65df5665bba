use sqlx::{Sqlite, SqliteExecutor};

use crate::doctors::repo_types::Doctor;

impl Doctor {
    pub async fn list_all<'e, E>(db: E) -> Result<Vec<Doctor>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Doctor>(
            r#"
            SELECT id, name, address, specialization
            FROM doctors
            ORDER BY name
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id<'e, E>(db: E, id: i64) -> Result<Option<Doctor>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Doctor>(
            r#"
            SELECT id, name, address, specialization
            FROM doctors
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create<'e, E>(
        db: E,
        name: &str,
        address: &str,
        specialization: &str,
    ) -> Result<Doctor, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Doctor>(
            r#"
            INSERT INTO doctors (name, address, specialization)
            VALUES (?, ?, ?)
            RETURNING id, name, address, specialization
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(specialization)
        .fetch_one(db)
        .await
    }
}
