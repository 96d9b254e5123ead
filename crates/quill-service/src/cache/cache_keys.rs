//! Cache key generators for consistent key naming.
//!
//! Each record type owns two kinds of keys: one collection key holding the
//! full list, and one key per record.

use quill_core::{PostId, UserId};
use std::fmt::Display;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "quill:cache";

/// Record types that have cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Post,
}

impl EntityKind {
    /// Singular name used in per-record keys and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Post => "post",
        }
    }

    /// Resource name reported in `NotFound` errors.
    #[must_use]
    pub const fn resource_type(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Post => "Post",
        }
    }

    /// Key of the cached collection of every record of this kind.
    #[must_use]
    pub fn collection_key(self) -> String {
        match self {
            Self::User => users(),
            Self::Post => posts(),
        }
    }

    /// Key of a single cached record.
    #[must_use]
    pub fn record_key(self, id: impl Display) -> String {
        format!("{}:{}:{}", CACHE_PREFIX, self.name(), id)
    }
}

/// Generate the cache key for the user collection.
#[must_use]
pub fn users() -> String {
    format!("{}:users", CACHE_PREFIX)
}

/// Generate a cache key for a user by ID.
#[must_use]
pub fn user_by_id(id: UserId) -> String {
    EntityKind::User.record_key(id)
}

/// Generate the cache key for the post collection.
#[must_use]
pub fn posts() -> String {
    format!("{}:posts", CACHE_PREFIX)
}

/// Generate a cache key for a post by ID.
#[must_use]
pub fn post_by_id(id: PostId) -> String {
    EntityKind::Post.record_key(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys() {
        assert_eq!(users(), "quill:cache:users");
        assert_eq!(posts(), "quill:cache:posts");
        assert_eq!(EntityKind::User.collection_key(), users());
        assert_eq!(EntityKind::Post.collection_key(), posts());
    }

    #[test]
    fn test_record_keys() {
        assert_eq!(user_by_id(UserId::new(7)), "quill:cache:user:7");
        assert_eq!(post_by_id(PostId::new(12)), "quill:cache:post:12");
    }

    #[test]
    fn test_record_and_collection_keys_never_collide() {
        assert_ne!(EntityKind::User.record_key("s"), users());
        assert_ne!(EntityKind::Post.record_key("s"), posts());
    }
}
