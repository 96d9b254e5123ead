//! Application state for Axum handlers.

use quill_repository::DatabasePoolInterface;
use quill_service::{PostService, UserService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub post_service: Arc<dyn PostService>,
    /// Probed by `/ready`. Absent when the services run without a database.
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, post_service: Arc<dyn PostService>) -> Self {
        Self {
            user_service,
            post_service,
            database: None,
        }
    }

    /// Attaches the database pool used by the readiness check.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn DatabasePoolInterface>) -> Self {
        self.database = Some(database);
        self
    }

    /// Resolves every handler dependency from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn UserService>
            + HasComponent<dyn PostService>
            + HasComponent<dyn DatabasePoolInterface>,
    {
        let user_service: Arc<dyn UserService> = module.resolve();
        let post_service: Arc<dyn PostService> = module.resolve();
        let database: Arc<dyn DatabasePoolInterface> = module.resolve();

        Self::new(user_service, post_service).with_database(database)
    }
}
