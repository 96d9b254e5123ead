//! Advisory view of the cache for one record type.
//!
//! Every method swallows cache failures: reads degrade to misses and
//! writes or invalidations are logged and dropped. Services only reach the
//! cache through this view, so a cache outage can add latency but never an
//! error.

use super::{cache_keys::EntityKind, CacheExt, CacheInterface};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache operations scoped to one [`EntityKind`].
#[derive(Clone, Copy)]
pub struct EntityCache<'a> {
    cache: &'a dyn CacheInterface,
    kind: EntityKind,
    ttl: Duration,
}

impl<'a> EntityCache<'a> {
    /// Creates a view over `cache` for records of `kind`.
    #[must_use]
    pub fn new(cache: &'a dyn CacheInterface, kind: EntityKind, ttl: Duration) -> Self {
        Self { cache, kind, ttl }
    }

    /// Reads the cached collection.
    ///
    /// An empty cached list counts as a miss.
    pub async fn collection<T>(&self) -> Option<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let items: Vec<T> = self.read(&self.kind.collection_key()).await?;
        if items.is_empty() {
            return None;
        }
        Some(items)
    }

    /// Caches the full collection. Empty collections are not cached.
    pub async fn store_collection<T>(&self, items: &[T])
    where
        T: Serialize + Sync,
    {
        if items.is_empty() {
            return;
        }
        self.write(&self.kind.collection_key(), items).await;
    }

    /// Reads one cached record.
    pub async fn record<T>(&self, id: impl Display) -> Option<T>
    where
        T: DeserializeOwned + Send,
    {
        self.read(&self.kind.record_key(id)).await
    }

    /// Caches one record.
    pub async fn store_record<T>(&self, id: impl Display, record: &T)
    where
        T: Serialize + Sync,
    {
        self.write(&self.kind.record_key(id), record).await;
    }

    /// Drops the cached collection.
    pub async fn invalidate_collection(&self) {
        self.remove(&self.kind.collection_key()).await;
    }

    /// Drops one cached record.
    pub async fn invalidate_record(&self, id: impl Display) {
        self.remove(&self.kind.record_key(id)).await;
    }

    /// Drops one cached record and the collection.
    pub async fn invalidate(&self, id: impl Display) {
        self.invalidate_record(id).await;
        self.invalidate_collection().await;
    }

    async fn read<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned + Send,
    {
        match self.cache.get::<T>(key).await {
            Ok(Some(value)) => {
                debug!(entity = self.kind.name(), key, "cache hit");
                Some(value)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(entity = self.kind.name(), key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    async fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize + Sync + ?Sized,
    {
        if let Err(e) = self.cache.set(key, &value, self.ttl).await {
            warn!(entity = self.kind.name(), key, error = %e, "cache write failed");
        }
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!(entity = self.kind.name(), key, error = %e, "cache invalidation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{cache_keys, InMemoryCache};
    use quill_core::{Post, PostId, UserId};

    const TTL: Duration = Duration::from_secs(300);

    fn sample_post(id: u64) -> Post {
        Post {
            id: PostId::new(id),
            title: "A".to_string(),
            content: "B".to_string(),
            user_id: UserId::new(1),
        }
    }

    #[tokio::test]
    async fn test_record_round_trip_uses_record_key() {
        let cache = InMemoryCache::new();
        let view = EntityCache::new(&cache, EntityKind::Post, TTL);

        view.store_record(PostId::new(3), &sample_post(3)).await;

        assert!(cache.contains(&cache_keys::post_by_id(PostId::new(3))));
        let cached: Option<Post> = view.record(PostId::new(3)).await;
        assert_eq!(cached, Some(sample_post(3)));
    }

    #[tokio::test]
    async fn test_empty_collection_is_never_cached() {
        let cache = InMemoryCache::new();
        let view = EntityCache::new(&cache, EntityKind::Post, TTL);

        view.store_collection::<Post>(&[]).await;
        assert!(!cache.contains(&cache_keys::posts()));

        cache.insert_raw(&cache_keys::posts(), "[]", TTL);
        assert!(view.collection::<Post>().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let cache = InMemoryCache::new();
        let view = EntityCache::new(&cache, EntityKind::Post, TTL);

        cache.insert_raw(&cache_keys::post_by_id(PostId::new(1)), "{not json", TTL);
        assert!(view.record::<Post>(PostId::new(1)).await.is_none());
    }

    #[tokio::test]
    async fn test_outage_is_absorbed() {
        let cache = InMemoryCache::new();
        let view = EntityCache::new(&cache, EntityKind::Post, TTL);
        cache.set_unavailable(true);

        view.store_collection(&[sample_post(1)]).await;
        view.invalidate(PostId::new(1)).await;
        assert!(view.collection::<Post>().await.is_none());
    }

    #[tokio::test]
    async fn test_invalidate_drops_record_and_collection() {
        let cache = InMemoryCache::new();
        let view = EntityCache::new(&cache, EntityKind::Post, TTL);
        view.store_record(PostId::new(1), &sample_post(1)).await;
        view.store_collection(&[sample_post(1)]).await;

        view.invalidate(PostId::new(1)).await;

        assert!(!cache.contains(&cache_keys::post_by_id(PostId::new(1))));
        assert!(!cache.contains(&cache_keys::posts()));
    }
}
