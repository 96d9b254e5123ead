//! PostgreSQL post repository implementation.

use crate::{traits::PostRepository, DatabasePoolInterface};
use async_trait::async_trait;
use quill_core::{NewPost, Post, PostId, PostPatch, QuillError, QuillResult, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

const INSERT_POST: &str = r#"
    INSERT INTO posts (title, content, user_id)
    VALUES ($1, $2, $3)
    RETURNING id, title, content, user_id
"#;

/// PostgreSQL post repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = PostRepository)]
pub struct PgPostRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgPostRepository {
    /// Creates a new PostgreSQL post repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a post.
#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
}

/// Keys above `i64::MAX` can never name a stored row.
fn db_key(id: PostId) -> Option<i64> {
    id.to_db().ok()
}

impl TryFrom<PostRow> for Post {
    type Error = QuillError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::from_db(row.id)?,
            title: row.title,
            content: row.content,
            user_id: UserId::from_db(row.user_id)?,
        })
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: &NewPost) -> QuillResult<Post> {
        debug!("Inserting post for user: {}", post.user_id);

        let row = sqlx::query_as::<_, PostRow>(INSERT_POST)
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.user_id.to_db()?)
            .fetch_one(self.pool.inner())
            .await?;

        Post::try_from(row)
    }

    async fn create_many(&self, posts: &[NewPost]) -> QuillResult<Vec<Post>> {
        debug!("Inserting {} posts in one transaction", posts.len());

        let mut tx = self.pool.inner().begin().await?;
        let mut created = Vec::with_capacity(posts.len());

        for post in posts {
            // Dropping `tx` on an early return rolls the transaction back.
            let row = sqlx::query_as::<_, PostRow>(INSERT_POST)
                .bind(&post.title)
                .bind(&post.content)
                .bind(post.user_id.to_db()?)
                .fetch_one(&mut *tx)
                .await?;
            created.push(Post::try_from(row)?);
        }

        tx.commit().await?;
        info!("Committed {} posts", created.len());

        Ok(created)
    }

    async fn find_all(&self) -> QuillResult<Vec<Post>> {
        debug!("Finding all posts");

        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, user_id FROM posts ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn find_by_id(&self, id: PostId) -> QuillResult<Option<Post>> {
        debug!("Finding post by id: {}", id);

        let Some(key) = db_key(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, user_id FROM posts WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Post::try_from).transpose()
    }

    async fn patch(&self, id: PostId, patch: &PostPatch) -> QuillResult<()> {
        debug!("Patching post: {}", id);

        let Some(key) = db_key(id) else {
            return Ok(());
        };
        let user_id = patch.user_id.map(UserId::to_db).transpose()?;

        sqlx::query(
            r#"
            UPDATE posts
            SET title = COALESCE($1, title),
                content = COALESCE($2, content),
                user_id = COALESCE($3, user_id)
            WHERE id = $4
            "#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.content.as_deref())
        .bind(user_id)
        .bind(key)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: PostId) -> QuillResult<bool> {
        debug!("Deleting post: {}", id);

        let Some(key) = db_key(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(key)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: UserId) -> QuillResult<Vec<PostId>> {
        debug!("Deleting posts owned by user: {}", user_id);

        let Ok(owner) = user_id.to_db() else {
            return Ok(Vec::new());
        };

        let ids: Vec<i64> = sqlx::query_scalar("DELETE FROM posts WHERE user_id = $1 RETURNING id")
            .bind(owner)
            .fetch_all(self.pool.inner())
            .await?;

        ids.into_iter().map(PostId::from_db).collect()
    }
}

impl std::fmt::Debug for PgPostRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPostRepository").finish_non_exhaustive()
    }
}
