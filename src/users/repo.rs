use sqlx::{Sqlite, SqliteExecutor};

use crate::users::repo_types::User;

impl User {
    pub async fn find_by_id<'e, E>(db: E, id: i64) -> Result<Option<User>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_username<'e, E>(
        db: E,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    pub async fn create<'e, E>(
        db: E,
        username: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES (?, ?)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Returns `None` when no user has this id.
    pub async fn update_password<'e, E>(
        db: E,
        id: i64,
        password_hash: &str,
    ) -> Result<Option<User>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, User>(
            r#"
            UPDATE users
            SET password_hash = ?
            WHERE id = ?
            RETURNING id, username, password_hash
            "#,
        )
        .bind(password_hash)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn count<'e, E>(db: E) -> Result<i64, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<Sqlite, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
    }
}
