//! Main application router.

use crate::{
    controllers::{follow_controller, health_controller, message_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tuiter_config::ServerConfig;

/// Creates the main application router.
///
/// DAOs arrive already constructed inside `AppState` (one per resource,
/// built at process start) and are shared by reference with every
/// handler.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    // Both resources hang off the same /api/users/:uid prefix.
    let user_scoped = Router::new()
        .merge(follow_controller::router())
        .merge(message_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // Follows and messages API
        .nest("/api/users/:uid", user_scoped)
        // Root endpoint
        .route("/", get(root))
        // Middleware layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with follows and messages endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.contains(&"*".to_string()) {
        return CorsLayer::permissive();
    }

    // Origins that fail to parse as header values are skipped.
    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Welcome to Tuiter!"
}
