//! User service implementation.

use crate::cache::{CacheInterface, EntityCache, EntityKind, DEFAULT_TTL};
use crate::dto::{CreateUserRequest, UpdateUserRequest};
use crate::user_service::UserService;
use async_trait::async_trait;
use quill_core::{NewUser, QuillError, QuillResult, User, UserId, ValidateExt};
use quill_repository::{PostRepository, UserRepository};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// User service component for Shaku DI.
///
/// Deleting a user also removes its posts, so the component needs the post
/// store and the post cache keys as well.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    post_repository: Arc<dyn PostRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl UserServiceComponent {
    /// Creates a user service outside of the DI container.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        post_repository: Arc<dyn PostRepository>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_repository,
            post_repository,
            cache,
            ttl,
        }
    }

    fn users(&self) -> EntityCache<'_> {
        EntityCache::new(self.cache.as_ref(), EntityKind::User, self.ttl)
    }

    fn posts(&self) -> EntityCache<'_> {
        EntityCache::new(self.cache.as_ref(), EntityKind::Post, self.ttl)
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn create_user(&self, request: CreateUserRequest) -> QuillResult<User> {
        debug!("Creating user: {}", request.name);

        request.validate_request()?;

        let user = self.user_repository.create(&NewUser::from(request)).await?;

        self.users().invalidate_collection().await;

        info!("User created: {}", user.id);
        Ok(user)
    }

    async fn list_users(&self) -> QuillResult<Vec<User>> {
        debug!("Listing users");

        let cache = self.users();
        if let Some(users) = cache.collection::<User>().await {
            return Ok(users);
        }

        let users = self.user_repository.find_all().await?;
        cache.store_collection(&users).await;

        Ok(users)
    }

    async fn get_user(&self, id: UserId) -> QuillResult<User> {
        debug!("Getting user: {}", id);

        let cache = self.users();
        if let Some(user) = cache.record::<User>(id).await {
            return Ok(user);
        }

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| QuillError::not_found("User", id))?;

        cache.store_record(id, &user).await;

        Ok(user)
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> QuillResult<()> {
        debug!("Updating user: {}", id);

        request.validate_request()?;

        self.user_repository
            .update(&User::new(id, request.name))
            .await?;

        self.users().invalidate(id).await;

        info!("User updated: {}", id);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> QuillResult<()> {
        debug!("Deleting user: {}", id);

        // Posts go first; a failure here leaves the user row untouched.
        let removed_posts = self.post_repository.delete_by_user(id).await?;

        let posts = self.posts();
        for post_id in &removed_posts {
            posts.invalidate_record(post_id).await;
        }
        posts.invalidate_collection().await;

        let deleted = self.user_repository.delete(id).await?;

        self.users().invalidate(id).await;

        if deleted {
            info!(
                "User deleted: {} (with {} posts)",
                id,
                removed_posts.len()
            );
        } else {
            debug!("User {} was already absent", id);
        }
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
