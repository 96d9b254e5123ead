//! Record store trait definitions.
//!
//! Both stores report a missing record as `Ok(None)`; only genuine store
//! failures surface as `Err(QuillError::Database)`.

use async_trait::async_trait;
use quill_core::{Interface, NewPost, NewUser, Post, PostId, PostPatch, QuillResult, User, UserId};

/// User record store.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts a new user; the store assigns the key.
    async fn create(&self, user: &NewUser) -> QuillResult<User>;

    /// Returns every user ordered by key.
    async fn find_all(&self) -> QuillResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> QuillResult<Option<User>>;

    /// Overwrites the mutable fields of the user with the same key.
    ///
    /// Updating a key that does not exist is a silent no-op.
    async fn update(&self, user: &User) -> QuillResult<()>;

    /// Deletes a user by ID. Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> QuillResult<bool>;
}

/// Post record store.
#[async_trait]
pub trait PostRepository: Interface + Send + Sync {
    /// Inserts a new post; the store assigns the key.
    async fn create(&self, post: &NewPost) -> QuillResult<Post>;

    /// Inserts every post in a single transaction.
    ///
    /// Either all rows are committed or none are.
    async fn create_many(&self, posts: &[NewPost]) -> QuillResult<Vec<Post>>;

    /// Returns every post ordered by key.
    async fn find_all(&self) -> QuillResult<Vec<Post>>;

    /// Finds a post by ID.
    async fn find_by_id(&self, id: PostId) -> QuillResult<Option<Post>>;

    /// Applies the set fields of `patch` to the post with the given key.
    async fn patch(&self, id: PostId, patch: &PostPatch) -> QuillResult<()>;

    /// Deletes a post by ID. Returns whether a row was removed.
    async fn delete(&self, id: PostId) -> QuillResult<bool>;

    /// Deletes every post owned by `user_id`, returning the removed keys.
    async fn delete_by_user(&self, user_id: UserId) -> QuillResult<Vec<PostId>>;
}
