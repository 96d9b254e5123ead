//! Domain records for Quill.
//!
//! `User` and `Post` are the two record types managed by the service. The
//! `New*` types carry the caller-supplied fields of a record before the store
//! assigns its key.

pub mod entities;

pub use entities::*;
