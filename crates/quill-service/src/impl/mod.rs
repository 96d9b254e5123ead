//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

pub mod post_service_impl;
pub mod user_service_impl;

pub use post_service_impl::{PostServiceComponent, PostServiceComponentParameters};
pub use user_service_impl::{UserServiceComponent, UserServiceComponentParameters};

#[cfg(test)]
pub(crate) mod mocks {
    use async_trait::async_trait;
    use mockall::mock;
    use quill_core::{NewPost, Post, PostId, PostPatch, QuillResult, UserId};
    use quill_repository::PostRepository;

    mock! {
        pub PostRepo {}

        #[async_trait]
        impl PostRepository for PostRepo {
            async fn create(&self, post: &NewPost) -> QuillResult<Post>;
            async fn create_many(&self, posts: &[NewPost]) -> QuillResult<Vec<Post>>;
            async fn find_all(&self) -> QuillResult<Vec<Post>>;
            async fn find_by_id(&self, id: PostId) -> QuillResult<Option<Post>>;
            async fn patch(&self, id: PostId, patch: &PostPatch) -> QuillResult<()>;
            async fn delete(&self, id: PostId) -> QuillResult<bool>;
            async fn delete_by_user(&self, user_id: UserId) -> QuillResult<Vec<PostId>>;
        }
    }
}
