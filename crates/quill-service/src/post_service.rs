//! Post service trait definition.

use crate::dto::{CreatePostRequest, CreatePostsRequest, UpdatePostRequest};
use async_trait::async_trait;
use quill_core::{Interface, Post, PostId, QuillResult};

/// Cache-aside access to post records.
#[async_trait]
pub trait PostService: Interface + Send + Sync {
    /// Creates a new post and returns it with its assigned key.
    async fn create_post(&self, request: CreatePostRequest) -> QuillResult<Post>;

    /// Creates every post in the batch atomically.
    async fn create_posts(&self, request: CreatePostsRequest) -> QuillResult<Vec<Post>>;

    /// Lists every post.
    async fn list_posts(&self) -> QuillResult<Vec<Post>>;

    /// Gets a post by ID.
    async fn get_post(&self, id: PostId) -> QuillResult<Post>;

    /// Applies a sparse update and returns the updated post.
    async fn update_post(&self, id: PostId, request: UpdatePostRequest) -> QuillResult<Post>;

    /// Deletes a post. Deleting a missing post succeeds.
    async fn delete_post(&self, id: PostId) -> QuillResult<()>;
}
