//! # Tuiter Server
//!
//! Main entry point for the Tuiter backend: loads configuration,
//! connects to the document store, constructs one DAO per resource,
//! and serves the REST API until shutdown.

use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tuiter_config::ConfigLoader;
use tuiter_core::{TuiterError, TuiterResult};
use tuiter_repository::{MongoFollowDao, MongoMessageDao, MongoStore};
use tuiter_rest::{create_router, AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // logging may not be initialized when config loading fails
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> TuiterResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config.observability.log_filter);

    info!("Starting Tuiter server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    // Connect to the document store
    let store = Arc::new(MongoStore::connect(&config.database).await?);

    // One DAO per resource, constructed here and passed by reference
    let follow_dao = Arc::new(MongoFollowDao::new(store.clone()));
    let message_dao = Arc::new(MongoMessageDao::new(store));

    let state = AppState::new(follow_dao, message_dao);
    let router = create_router(state, &config.server);

    // Start REST server
    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| TuiterError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TuiterError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
