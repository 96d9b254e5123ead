//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// User record as persisted in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned key.
    pub id: UserId,

    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a user record with an already assigned key.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fields supplied by a caller to create a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    /// Creates a new user payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Materializes the record once the store has assigned a key.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User { id, name: self.name }
    }
}
