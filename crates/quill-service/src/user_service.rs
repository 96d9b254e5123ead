//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest};
use async_trait::async_trait;
use quill_core::{Interface, QuillResult, User, UserId};

/// Cache-aside access to user records.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user and returns it with its assigned key.
    async fn create_user(&self, request: CreateUserRequest) -> QuillResult<User>;

    /// Lists every user.
    async fn list_users(&self) -> QuillResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> QuillResult<User>;

    /// Overwrites a user's name.
    ///
    /// There is no existence check: updating a missing user succeeds
    /// without effect.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> QuillResult<()>;

    /// Deletes a user together with every post it owns.
    async fn delete_user(&self, id: UserId) -> QuillResult<()>;
}
