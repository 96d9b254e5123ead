//! # Quill Service
//!
//! Cache-aside record services. Reads go through the cache and fall back
//! to the store; every successful write invalidates the affected keys.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod post_service;
pub mod user_service;

pub use cache::*;
pub use dto::*;
pub use post_service::*;
pub use r#impl::*;
pub use user_service::*;
