//! Subscribe API
//!
//! Email capture for event notifications.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extract::ValidatedJson;
use crate::api::state::ApiState;
use crate::domain::subscriber::default_source;
use crate::domain::{default_true, validate_email_domain, StoredRecord, Subscriber};
use crate::error::PlatformError;
use crate::repository::create_document;

/// Email-capture payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubscribePayload {
    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub sale_event_id: Option<String>,

    /// Acquisition source, "landing" when omitted
    #[serde(default = "default_source")]
    pub source: Option<String>,

    #[serde(default = "default_true")]
    pub accepted_marketing: bool,
}

impl From<SubscribePayload> for Subscriber {
    fn from(p: SubscribePayload) -> Self {
        Self {
            email: p.email,
            first_name: p.first_name,
            sale_event_id: p.sale_event_id,
            source: p.source,
            accepted_marketing: p.accepted_marketing,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubscribeResponse {
    pub ok: bool,
    pub id: String,
}

/// Register a subscriber
#[utoipa::path(
    post,
    path = "/api/subscribe",
    tag = "subscribers",
    request_body = SubscribePayload,
    responses(
        (status = 200, description = "Subscriber stored", body = SubscribeResponse),
        (status = 422, description = "Validation error", body = crate::api::common::ApiError),
        (status = 500, description = "Database unavailable or insert failed", body = crate::api::common::ApiError)
    )
)]
pub async fn subscribe(
    State(state): State<ApiState>,
    ValidatedJson(payload): ValidatedJson<SubscribePayload>,
) -> Result<Json<SubscribeResponse>, PlatformError> {
    let store = state.store()?;
    let subscriber = Subscriber::from(payload);

    let id = create_document(store, Subscriber::COLLECTION, &subscriber).await?;
    info!(id = %id, sale_event_id = ?subscriber.sale_event_id, "Subscriber registered");

    Ok(Json(SubscribeResponse { ok: true, id }))
}

pub fn subscribe_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/subscribe", post(subscribe))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults_carry_into_subscriber() {
        let payload: SubscribePayload = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert!(payload.validate().is_ok());

        let subscriber = Subscriber::from(payload);
        assert_eq!(subscriber, Subscriber::new("a@b.com"));
    }

    #[test]
    fn test_payload_overrides() {
        let payload: SubscribePayload = serde_json::from_str(
            r#"{"email":"a@b.com","first_name":"Ana","source":"instagram","accepted_marketing":false}"#,
        ).unwrap();
        let subscriber = Subscriber::from(payload);
        assert_eq!(subscriber.source.as_deref(), Some("instagram"));
        assert!(!subscriber.accepted_marketing);
        assert_eq!(subscriber.first_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_malformed_email_fails_validation() {
        let payload: SubscribePayload = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
