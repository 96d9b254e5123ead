//! # Quill Server
//!
//! Main entry point: loads configuration, connects to PostgreSQL and Redis,
//! wires the Shaku module and serves the REST API until shutdown.

use quill_config::{AppConfig, ConfigLoader};
use quill_core::{QuillError, QuillResult};
use quill_repository::{DatabasePool, DatabasePoolInterface};
use quill_rest::create_router_from_module;
use quill_server::di::{build_app_module, ServiceResolver};
use quill_server::logging::init_logging;
use quill_server::startup::{print_banner, print_startup_info};
use quill_service::create_redis_pool;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_logging(&config.observability)?;

    info!("Starting Quill Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn run(config: AppConfig) -> QuillResult<()> {
    print_banner();

    let db_pool = DatabasePool::new(&config.database).await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let cache_pool = create_redis_pool(&config.redis)?;

    let module = build_app_module(db_pool, cache_pool, config.cache.ttl());

    let router = create_router_from_module(module.as_ref(), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| QuillError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| QuillError::Internal(format!("REST server error: {}", e)))?;

    module.database_pool().close().await;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
