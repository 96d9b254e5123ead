//! Post entity.

use crate::{PostId, UserId};
use serde::{Deserialize, Serialize};

/// Post record as persisted in the `posts` table.
///
/// `user_id` references the owning user. The reference is not enforced by the
/// schema; deleting a user removes its posts in application code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Post {
    /// Store-assigned key.
    pub id: PostId,

    /// Post title.
    pub title: String,

    /// Post body.
    pub content: String,

    /// Owning user.
    pub user_id: UserId,
}

/// Fields supplied by a caller to create a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

impl NewPost {
    /// Creates a new post payload.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id,
        }
    }

    /// Materializes the record once the store has assigned a key.
    #[must_use]
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            user_id: self.user_id,
        }
    }
}

/// Sparse update of a post: `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl PostPatch {
    /// Returns `true` when the patch would not change anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.user_id.is_none()
    }

    /// Applies the set fields to `post` in place.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            post.content.clone_from(content);
        }
        if let Some(user_id) = self.user_id {
            post.user_id = user_id;
        }
    }
}
