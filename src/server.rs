//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database migrations, state wiring and the Axum
//! server lifecycle.

use crate::application::services::MappingService;
use crate::config::{Config, StorageBackend};
use crate::domain::clock::SystemClock;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
use crate::infrastructure::qr::PngQrRenderer;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL pool + migrations, or in-memory)
/// - QR renderer and mapping service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let service = MappingService::new(repository, Arc::new(SystemClock))
        .with_code_policy(config.code_length, config.code_max_attempts);

    let state = AppState::new(
        Arc::new(service),
        Arc::new(PngQrRenderer::new()),
        &config.base_url,
    );

    let app = app_router(state, &config.cors_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the mapping store selected by `STORAGE_BACKEND`.
async fn build_repository(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; mappings are lost on restart");
            Ok(Arc::new(InMemoryMappingRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = connect_pool(config, database_url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
        }
    }
}

async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
