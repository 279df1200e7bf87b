//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    state::AppState,
};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use usuarios_config::ServerConfig;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = user_controller::router().with_state(state);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // User CRUD
        .nest("/usuarios", api_router)
        // Middleware layers
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Router created with /usuarios endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}
