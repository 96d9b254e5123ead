//! Caching infrastructure for the service layer.
//!
//! [`CacheInterface`] is the raw key-value contract with Redis and in-memory
//! backends. Services wrap it in an [`EntityCache`] per record type, which
//! turns every cache failure into a logged miss.

mod cache_interface;
pub mod cache_keys;
mod entity_cache;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use cache_keys::EntityKind;
pub use entity_cache::EntityCache;
pub use memory_cache::InMemoryCache;
pub use redis_cache::{create_redis_pool, RedisCacheService, RedisCacheServiceParameters, DEFAULT_TTL};
