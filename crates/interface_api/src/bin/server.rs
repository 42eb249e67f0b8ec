//! Insurance Records - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # In-memory store (default)
//! cargo run --bin insurance-api
//!
//! # PostgreSQL store
//! API_STORAGE=postgres API_DATABASE_URL=postgres://... cargo run --bin insurance-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log filter, overridden by `RUST_LOG` (default: info)
//! * `API_LOG_FORMAT` - `text` or `json` (default: text)
//! * `API_STORAGE` - `memory` or `postgres` (default: memory)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_DB_MAX_CONNECTIONS` - Pool size (default: 10)

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_db::{create_pool, run_migrations, DatabaseConfig};
use interface_api::config::{ApiConfig, LogFormat, StorageBackend};
use interface_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;
    init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = ?config.storage,
        "Starting insurance records API server"
    );

    let state = build_state(&config).await?;
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` wins over the configured log level when set.
fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Builds the application state for the configured store
async fn build_state(config: &ApiConfig) -> anyhow::Result<AppState> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory store");
            Ok(AppState::in_memory())
        }
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::new(&config.database_url)
                .max_connections(config.db_max_connections);
            let pool = create_pool(db_config)
                .await
                .context("connecting to database")?;
            run_migrations(&pool).await.context("applying migrations")?;
            Ok(AppState::postgres(pool))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
