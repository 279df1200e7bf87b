//! # Usuarios Server
//!
//! Main entry point for the usuarios service: loads configuration,
//! connects to MySQL, wires the repository/service/REST layers, and
//! serves HTTP with graceful shutdown.

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use usuarios_config::ConfigLoader;
use usuarios_core::{UsuariosError, UsuariosResult};
use usuarios_repository::{create_pool, MySqlUserRepository, UserRepository};
use usuarios_rest::{create_router, AppState};
use usuarios_service::{UserService, UserServiceImpl};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Usuarios Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> UsuariosResult<()> {
    startup::print_banner();

    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and bring the schema up to date
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Wire the layers explicitly: repository -> service -> REST
    let user_repository: Arc<dyn UserRepository> =
        Arc::new(MySqlUserRepository::new(db_pool));
    let user_service: Arc<dyn UserService> =
        Arc::new(UserServiceImpl::new(user_repository));

    let app_state = AppState::new(user_service);
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| UsuariosError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| UsuariosError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,usuarios=debug,tower_http=debug"));

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
