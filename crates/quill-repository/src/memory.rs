//! In-memory record store.
//!
//! Implements both [`UserRepository`] and [`PostRepository`] over a single
//! locked state so cascades behave as they would against one database.
//! Used by service and handler tests, and for running without PostgreSQL.

use crate::traits::{PostRepository, UserRepository};
use async_trait::async_trait;
use parking_lot::RwLock;
use quill_core::{NewPost, NewUser, Post, PostId, PostPatch, QuillError, QuillResult, User, UserId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    posts: BTreeMap<PostId, Post>,
    next_user_id: u64,
    next_post_id: u64,
}

impl StoreState {
    fn allocate_user_id(&mut self) -> UserId {
        self.next_user_id += 1;
        UserId::new(self.next_user_id)
    }

    fn allocate_post_id(&mut self) -> PostId {
        self.next_post_id += 1;
        PostId::new(self.next_post_id)
    }
}

/// Thread-safe in-memory store with outage simulation.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent read fail with a database error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail with a database error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Simulates a full outage (reads and writes).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail_reads(unavailable);
        self.fail_writes(unavailable);
    }

    /// Number of stored users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.state.read().users.len()
    }

    /// Number of stored posts.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.state.read().posts.len()
    }

    fn check_read(&self) -> QuillResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(QuillError::database("store unavailable (read)"));
        }
        Ok(())
    }

    fn check_write(&self) -> QuillResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(QuillError::database("store unavailable (write)"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> QuillResult<User> {
        self.check_write()?;
        let mut state = self.state.write();
        let id = state.allocate_user_id();
        let created = user.clone().into_user(id);
        state.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> QuillResult<Vec<User>> {
        self.check_read()?;
        Ok(self.state.read().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> QuillResult<Option<User>> {
        self.check_read()?;
        Ok(self.state.read().users.get(&id).cloned())
    }

    async fn update(&self, user: &User) -> QuillResult<()> {
        self.check_write()?;
        if let Some(existing) = self.state.write().users.get_mut(&user.id) {
            existing.name.clone_from(&user.name);
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> QuillResult<bool> {
        self.check_write()?;
        Ok(self.state.write().users.remove(&id).is_some())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, post: &NewPost) -> QuillResult<Post> {
        self.check_write()?;
        let mut state = self.state.write();
        let id = state.allocate_post_id();
        let created = post.clone().into_post(id);
        state.posts.insert(id, created.clone());
        Ok(created)
    }

    async fn create_many(&self, posts: &[NewPost]) -> QuillResult<Vec<Post>> {
        self.check_write()?;
        let mut state = self.state.write();
        let created: Vec<Post> = posts
            .iter()
            .map(|post| {
                let id = state.allocate_post_id();
                post.clone().into_post(id)
            })
            .collect();
        for post in &created {
            state.posts.insert(post.id, post.clone());
        }
        Ok(created)
    }

    async fn find_all(&self) -> QuillResult<Vec<Post>> {
        self.check_read()?;
        Ok(self.state.read().posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> QuillResult<Option<Post>> {
        self.check_read()?;
        Ok(self.state.read().posts.get(&id).cloned())
    }

    async fn patch(&self, id: PostId, patch: &PostPatch) -> QuillResult<()> {
        self.check_write()?;
        if let Some(post) = self.state.write().posts.get_mut(&id) {
            patch.apply_to(post);
        }
        Ok(())
    }

    async fn delete(&self, id: PostId) -> QuillResult<bool> {
        self.check_write()?;
        Ok(self.state.write().posts.remove(&id).is_some())
    }

    async fn delete_by_user(&self, user_id: UserId) -> QuillResult<Vec<PostId>> {
        self.check_write()?;
        let mut state = self.state.write();
        let owned: Vec<PostId> = state
            .posts
            .values()
            .filter(|post| post.user_id == user_id)
            .map(|post| post.id)
            .collect();
        for id in &owned {
            state.posts.remove(id);
        }
        Ok(owned)
    }
}
