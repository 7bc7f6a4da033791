//! HTTP server initialization and runtime setup.
//!
//! Builds the store client and submission ledger, then runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::RecordStore;
use crate::infrastructure::ledger::{MemoryLedger, NullLedger, SubmissionLedger};
use crate::infrastructure::notion::NotionStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::telemetry::Telemetry;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Notion record store client
/// - Submission ledger (or NullLedger when the window is 0)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config, telemetry: Telemetry) -> Result<()> {
    let store: Arc<dyn RecordStore> =
        Arc::new(NotionStore::new(&config.store).context("Failed to create record store client")?);
    tracing::info!("Record store client ready");

    let ledger: Arc<dyn SubmissionLedger> = if config.dedup_window_seconds > 0 {
        Arc::new(MemoryLedger::new(Duration::from_secs(
            config.dedup_window_seconds,
        )))
    } else {
        tracing::info!("Duplicate submission suppression disabled");
        Arc::new(NullLedger::new())
    };

    let state = AppState::new(store, ledger, config.validation_mode, telemetry.analytics);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
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

    tracing::info!("Shutdown signal received");
}
