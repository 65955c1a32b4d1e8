//! RunFlash Platform Server
//!
//! Serves the public landing-page APIs:
//! - `GET /` and `GET /test`: liveness and database diagnostics
//! - `GET /api/events`: upcoming and live sale events
//! - `GET /api/events/{event_id}/products`: products of an event
//! - `POST /api/subscribe`: email capture
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | `8000` | HTTP API port |
//! | `HOST` | `0.0.0.0` | Bind address |
//! | `DATABASE_URL` | - | MongoDB connection URL |
//! | `DATABASE_NAME` | - | MongoDB database name |
//! | `RF_LOG_FORMAT` | `text` | `text` or `json` |
//! | `RUST_LOG` | `info` | Log level |

use std::sync::Arc;

use anyhow::Result;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use rf_common::{init_logging, ServerConfig};
use rf_platform::api::{platform_router, ApiState};
use rf_platform::repository::{DocumentStore, MongoDocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    init_logging(config.log_format);

    info!("Starting RunFlash Platform Server");

    let store = open_store(&config).await;
    let state = match store {
        Some(store) => ApiState::new(store),
        None => ApiState::without_store(),
    }
    .with_database_info(config.database_url.is_some(), config.database_name.clone());

    let app = platform_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("RunFlash Platform Server shutdown complete");
    Ok(())
}

/// Open the document store. A missing setting or a bad connection string
/// leaves the server running without a database.
async fn open_store(config: &ServerConfig) -> Option<Arc<dyn DocumentStore>> {
    let Some((url, name)) = config.database() else {
        warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return None;
    };

    info!("Connecting to MongoDB database {}", name);
    match MongoDocumentStore::connect(url, name).await {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            warn!(error = %e, "Could not configure MongoDB client, running without a database");
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received...");
}
