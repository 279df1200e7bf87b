//! Application state for Axum handlers.

use std::sync::Arc;
use usuarios_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
