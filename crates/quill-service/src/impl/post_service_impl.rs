//! Post service implementation.

use crate::cache::{CacheInterface, EntityCache, EntityKind, DEFAULT_TTL};
use crate::dto::{CreatePostRequest, CreatePostsRequest, UpdatePostRequest};
use crate::post_service::PostService;
use async_trait::async_trait;
use quill_core::{NewPost, Post, PostId, PostPatch, QuillError, QuillResult, ValidateExt};
use quill_repository::PostRepository;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Post service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = PostService)]
pub struct PostServiceComponent {
    #[shaku(inject)]
    post_repository: Arc<dyn PostRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl PostServiceComponent {
    /// Creates a post service outside of the DI container.
    #[must_use]
    pub fn new(
        post_repository: Arc<dyn PostRepository>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self {
            post_repository,
            cache,
            ttl,
        }
    }

    fn posts(&self) -> EntityCache<'_> {
        EntityCache::new(self.cache.as_ref(), EntityKind::Post, self.ttl)
    }
}

#[async_trait]
impl PostService for PostServiceComponent {
    async fn create_post(&self, request: CreatePostRequest) -> QuillResult<Post> {
        debug!("Creating post for user: {}", request.user_id);

        request.validate_request()?;

        let post = self.post_repository.create(&NewPost::from(request)).await?;

        self.posts().invalidate_collection().await;

        info!("Post created: {}", post.id);
        Ok(post)
    }

    async fn create_posts(&self, request: CreatePostsRequest) -> QuillResult<Vec<Post>> {
        debug!(
            "Creating {} posts for user: {}",
            request.posts.len(),
            request.user_id
        );

        request.validate_request()?;

        let posts = self
            .post_repository
            .create_many(&request.into_new_posts())
            .await?;

        self.posts().invalidate_collection().await;

        info!("Created {} posts", posts.len());
        Ok(posts)
    }

    async fn list_posts(&self) -> QuillResult<Vec<Post>> {
        debug!("Listing posts");

        let cache = self.posts();
        if let Some(posts) = cache.collection::<Post>().await {
            return Ok(posts);
        }

        let posts = self.post_repository.find_all().await?;
        cache.store_collection(&posts).await;

        Ok(posts)
    }

    async fn get_post(&self, id: PostId) -> QuillResult<Post> {
        debug!("Getting post: {}", id);

        let cache = self.posts();
        if let Some(post) = cache.record::<Post>(id).await {
            return Ok(post);
        }

        let post = self
            .post_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| QuillError::not_found("Post", id))?;

        cache.store_record(id, &post).await;

        Ok(post)
    }

    async fn update_post(&self, id: PostId, request: UpdatePostRequest) -> QuillResult<Post> {
        debug!("Updating post: {}", id);

        request.validate_request()?;

        let mut post = self
            .post_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| QuillError::not_found("Post", id))?;

        let patch = PostPatch::from(request);
        self.post_repository.patch(id, &patch).await?;

        self.posts().invalidate(id).await;

        patch.apply_to(&mut post);
        info!("Post updated: {}", id);
        Ok(post)
    }

    async fn delete_post(&self, id: PostId) -> QuillResult<()> {
        debug!("Deleting post: {}", id);

        let deleted = self.post_repository.delete(id).await?;

        self.posts().invalidate(id).await;

        if deleted {
            info!("Post deleted: {}", id);
        } else {
            debug!("Post {} was already absent", id);
        }
        Ok(())
    }
}

impl std::fmt::Debug for PostServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostServiceComponent")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
