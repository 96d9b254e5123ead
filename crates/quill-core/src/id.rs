//! Typed ID wrappers for records.
//!
//! Keys are assigned by the store on creation and never change afterwards.
//! The relational backend stores them as `BIGINT`, so conversions from the
//! signed database representation are fallible.

use crate::QuillError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Creates a user ID from a raw key.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parses a user ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Returns the key in its database representation.
    pub fn to_db(self) -> Result<i64, QuillError> {
        i64::try_from(self.0)
            .map_err(|_| QuillError::validation(format!("User id {} is out of range", self.0)))
    }

    /// Builds a user ID from its database representation.
    pub fn from_db(raw: i64) -> Result<Self, QuillError> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| QuillError::database(format!("Invalid user id in database: {}", raw)))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for post IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// Creates a post ID from a raw key.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parses a post ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Returns the key in its database representation.
    pub fn to_db(self) -> Result<i64, QuillError> {
        i64::try_from(self.0)
            .map_err(|_| QuillError::validation(format!("Post id {} is out of range", self.0)))
    }

    /// Builds a post ID from its database representation.
    pub fn from_db(raw: i64) -> Result<Self, QuillError> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| QuillError::database(format!("Invalid post id in database: {}", raw)))
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<PostId> for u64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}
