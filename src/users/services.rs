use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::users::{
    password::{hash_password, verify_password},
    repo_types::User,
};

const USERNAME_MAX_LEN: usize = 100;

#[instrument(skip(db, password))]
pub async fn register_user(db: &SqlitePool, username: &str, password: &str) -> AppResult<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username must not be empty".into()));
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "username longer than {USERNAME_MAX_LEN} characters"
        )));
    }
    if password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }

    if User::find_by_username(db, username).await?.is_some() {
        warn!(%username, "username already registered");
        return Err(AppError::Conflict(format!("username {username} is taken")));
    }

    let hash = hash_password(password)?;
    let user = match User::create(db, username, &hash).await {
        Ok(u) => u,
        // Lost a race with a concurrent registration.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::Conflict(format!("username {username} is taken")));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user)
}

#[instrument(skip(db))]
pub async fn get_user(db: &SqlitePool, id: i64) -> AppResult<User> {
    User::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))
}

/// Replaces the password after checking the current one.
#[instrument(skip(db, current, new))]
pub async fn change_password(
    db: &SqlitePool,
    id: i64,
    current: &str,
    new: &str,
) -> AppResult<User> {
    if new.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }
    let user = get_user(db, id).await?;
    if !verify_password(current, &user.password_hash)? {
        warn!(user_id = id, "password change with wrong current password");
        return Err(AppError::Forbidden("current password does not match".into()));
    }

    let hash = hash_password(new)?;
    let user = User::update_password(db, id, &hash)
        .await?
        .ok_or_else(|| AppError::not_found("user", id))?;
    info!(user_id = id, "password changed");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn register_stores_a_hash_and_trims_the_username() {
        let state = test_state().await;
        let user = register_user(&state.db, "  alice ", "s3cret").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "s3cret");
        assert!(verify_password("s3cret", &user.password_hash).unwrap());

        let loaded = get_user(&state.db, user.id).await.unwrap();
        assert_eq!(loaded.username, "alice");
    }

    #[tokio::test]
    async fn register_rejects_taken_username() {
        let state = test_state().await;
        register_user(&state.db, "bob", "one").await.unwrap();
        let err = register_user(&state.db, "bob", "two").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_rejects_empty_and_overlong_usernames() {
        let state = test_state().await;
        let err = register_user(&state.db, "   ", "pw").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let long = "x".repeat(101);
        let err = register_user(&state.db, &long, "pw").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn change_password_rehashes() {
        let state = test_state().await;
        let user = register_user(&state.db, "carol", "old-pw").await.unwrap();
        let updated = change_password(&state.db, user.id, "old-pw", "new-pw")
            .await
            .unwrap();
        assert!(verify_password("new-pw", &updated.password_hash).unwrap());
        assert!(!verify_password("old-pw", &updated.password_hash).unwrap());
        assert_eq!(updated.username, "carol");
    }

    #[tokio::test]
    async fn change_password_requires_the_current_one() {
        let state = test_state().await;
        let user = register_user(&state.db, "dave", "old-pw").await.unwrap();
        let err = change_password(&state.db, user.id, "guess", "new-pw")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        let stored = get_user(&state.db, user.id).await.unwrap();
        assert!(verify_password("old-pw", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let state = test_state().await;
        assert!(matches!(
            get_user(&state.db, 99).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            change_password(&state.db, 99, "pw", "pw2").await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
