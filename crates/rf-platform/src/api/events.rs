//! Sale Events API
//!
//! Public listing of upcoming and live events for the landing page.

use axum::{extract::State, routing::get, Json, Router};
use bson::{doc, Document};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::projection::{datetime, document_id, optional_str, string_list};
use crate::api::state::ApiState;
use crate::domain::{EventStatus, SaleEvent, StoredRecord};
use crate::error::PlatformError;
use crate::repository::get_documents;

pub const UPCOMING_EVENTS_LIMIT: i64 = 50;

/// Public event card
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub banner_url: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: EventStatus,
    pub categories: Vec<String>,
}

impl EventCard {
    /// Project a stored event. Missing timestamps fall back to `now`.
    pub fn from_document(doc: &Document, now: DateTime<Utc>) -> Self {
        Self {
            id: document_id(doc),
            title: optional_str(doc, "title").unwrap_or_default(),
            subtitle: optional_str(doc, "subtitle"),
            banner_url: optional_str(doc, "banner_url"),
            start_at: datetime(doc, "start_at").unwrap_or(now),
            end_at: datetime(doc, "end_at").unwrap_or(now),
            status: stored_status(doc),
            categories: string_list(doc, "categories"),
        }
    }
}

fn stored_status(doc: &Document) -> EventStatus {
    match doc.get_str("status") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(status = raw, id = %document_id(doc), "Unrecognised event status, reporting as scheduled");
            EventStatus::Scheduled
        }),
        Err(_) => EventStatus::default(),
    }
}

/// Filter for events that have not ended at `now`.
pub fn upcoming_filter(now: DateTime<Utc>) -> Document {
    doc! { "end_at": { "$gte": bson::DateTime::from_chrono(now) } }
}

/// List upcoming and live events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses(
        (status = 200, description = "Events ending now or later (max 50)", body = Vec<EventCard>),
        (status = 500, description = "Database unavailable or query failed", body = crate::api::common::ApiError)
    )
)]
pub async fn list_events(
    State(state): State<ApiState>,
) -> Result<Json<Vec<EventCard>>, PlatformError> {
    let store = state.store()?;
    let now = Utc::now();

    let docs = get_documents(store, SaleEvent::COLLECTION, upcoming_filter(now), UPCOMING_EVENTS_LIMIT).await?;
    let events = docs.iter()
        .map(|d| EventCard::from_document(d, now))
        .collect();

    Ok(Json(events))
}

pub fn events_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/events", get(list_events))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;
    use chrono::Duration;

    #[test]
    fn test_projection_drops_internal_fields() {
        let oid = ObjectId::new();
        let start = Utc::now() - Duration::hours(1);
        let end = Utc::now() + Duration::hours(1);
        let doc = doc! {
            "_id": oid,
            "title": "Vente Flash Vanille",
            "subtitle": "48h seulement",
            "start_at": bson::DateTime::from_chrono(start),
            "end_at": bson::DateTime::from_chrono(end),
            "brand_ids": ["b1"],
            "categories": ["terroir"],
            "status": "live",
            "created_at": bson::DateTime::now(),
        };

        let card = EventCard::from_document(&doc, Utc::now());
        assert_eq!(card.id, oid.to_hex());
        assert_eq!(card.title, "Vente Flash Vanille");
        assert_eq!(card.subtitle.as_deref(), Some("48h seulement"));
        assert_eq!(card.status, EventStatus::Live);
        assert_eq!(card.categories, vec!["terroir"]);
        assert_eq!(card.end_at.timestamp_millis(), end.timestamp_millis());

        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("brand_ids").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_projection_defaults() {
        let now = Utc::now();
        let card = EventCard::from_document(&doc! { "_id": "e1" }, now);
        assert_eq!(card.title, "");
        assert_eq!(card.start_at, now);
        assert_eq!(card.end_at, now);
        assert_eq!(card.status, EventStatus::Scheduled);
        assert!(card.categories.is_empty());
        assert!(card.banner_url.is_none());
    }

    #[test]
    fn test_unknown_status_reported_as_scheduled() {
        let card = EventCard::from_document(&doc! { "_id": "e1", "status": "paused" }, Utc::now());
        assert_eq!(card.status, EventStatus::Scheduled);
    }

    #[test]
    fn test_upcoming_filter_shape() {
        let now = Utc::now();
        let filter = upcoming_filter(now);
        let gte = filter.get_document("end_at").unwrap().get_datetime("$gte").unwrap();
        assert_eq!(gte.timestamp_millis(), now.timestamp_millis());
    }
}
