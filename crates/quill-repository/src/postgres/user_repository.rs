//! PostgreSQL user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use quill_core::{NewUser, QuillError, QuillResult, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct PgUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
}

/// Keys above `i64::MAX` can never name a stored row.
fn db_key(id: UserId) -> Option<i64> {
    id.to_db().ok()
}

impl TryFrom<UserRow> for User {
    type Error = QuillError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::from_db(row.id)?,
            name: row.name,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> QuillResult<User> {
        debug!("Inserting user: {}", user.name);

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&user.name)
        .fetch_one(self.pool.inner())
        .await?;

        User::try_from(row)
    }

    async fn find_all(&self) -> QuillResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> QuillResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let Some(key) = db_key(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = $1")
            .bind(key)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, user: &User) -> QuillResult<()> {
        debug!("Updating user: {}", user.id);

        let Some(key) = db_key(user.id) else {
            return Ok(());
        };

        sqlx::query("UPDATE users SET name = $1 WHERE id = $2")
            .bind(&user.name)
            .bind(key)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn delete(&self, id: UserId) -> QuillResult<bool> {
        debug!("Deleting user: {}", id);

        let Some(key) = db_key(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(key)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserRepository").finish_non_exhaustive()
    }
}
