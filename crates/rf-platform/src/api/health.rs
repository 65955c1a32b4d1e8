//! Health API
//!
//! Liveness message and the database diagnostic probe.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::common::MessageResponse;
use crate::api::state::ApiState;
use crate::error::truncate_message;

pub const READY_MESSAGE: &str = "RunFlash backend ready";

/// Maximum number of collection names reported by the probe
pub const MAX_REPORTED_COLLECTIONS: usize = 20;

const PROBE_ERROR_LEN: usize = 80;

/// Diagnostic snapshot of the backend and its database
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DatabaseDiagnostics {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: "❌ Not Set".to_string(),
            database_name: "❌ Not Set".to_string(),
            connection_status: "Not Connected".to_string(),
            collections: vec![],
        }
    }
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Backend is running", body = MessageResponse)
    )
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::new(READY_MESSAGE))
}

/// Database diagnostic probe. Never fails; problems are reported in the body.
#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "Diagnostic report", body = DatabaseDiagnostics)
    )
)]
pub async fn test_database(State(state): State<ApiState>) -> Json<DatabaseDiagnostics> {
    let mut report = DatabaseDiagnostics::default();

    let Some(store) = state.store.as_deref() else {
        report.database = "⚠️ Available but not initialized".to_string();
        return Json(report);
    };

    report.database = "✅ Available".to_string();
    let url_status = if state.database_url_set { "✅ Set" } else { "❌ Not Set" };
    report.database_url = url_status.to_string();
    report.database_name = state.database_name.clone().unwrap_or_else(|| "Unknown".to_string());

    match store.list_collection_names().await {
        Ok(names) => {
            report.collections = names.into_iter().take(MAX_REPORTED_COLLECTIONS).collect();
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
        }
        Err(e) => {
            warn!(error = %e, "Database probe failed");
            report.database = format!(
                "⚠️ Connected but error: {}",
                truncate_message(&e.to_string(), PROBE_ERROR_LEN)
            );
        }
    }

    Json(report)
}

pub fn health_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
        .with_state(state)
}
