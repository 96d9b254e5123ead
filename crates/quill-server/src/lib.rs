//! # Quill Server Library
//!
//! Dependency injection wiring, logging setup and startup helpers for the
//! Quill server binary.

pub mod di;
pub mod logging;
pub mod startup;
