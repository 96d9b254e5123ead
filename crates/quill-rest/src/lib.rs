//! # Quill REST
//!
//! REST API layer using Axum for Quill.
//! Provides HTTP endpoints for users, posts, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
