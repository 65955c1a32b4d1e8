//! Sale Products API
//!
//! Product cards for a single sale event.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use bson::{doc, Document};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::projection::{document_id, first_string, number_f64, number_i64, optional_str};
use crate::api::state::ApiState;
use crate::domain::{SaleProduct, StoredRecord};
use crate::error::PlatformError;
use crate::repository::get_documents;

pub const EVENT_PRODUCTS_LIMIT: i64 = 200;

/// Public product card
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price_original: f64,
    pub price_sale: f64,
    /// First stored image, if any
    pub image: Option<String>,
    pub stock: i64,
}

impl ProductCard {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: document_id(doc),
            title: optional_str(doc, "title").unwrap_or_default(),
            price_original: number_f64(doc, "price_original").unwrap_or(0.0),
            price_sale: number_f64(doc, "price_sale").unwrap_or(0.0),
            image: first_string(doc, "images"),
            stock: number_i64(doc, "stock").unwrap_or(0),
        }
    }
}

pub fn event_products_filter(event_id: &str) -> Document {
    doc! { "sale_event_id": event_id }
}

/// List products of a sale event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/products",
    tag = "products",
    params(
        ("event_id" = String, Path, description = "Sale event ID")
    ),
    responses(
        (status = 200, description = "Products of the event (max 200)", body = Vec<ProductCard>),
        (status = 500, description = "Database unavailable or query failed", body = crate::api::common::ApiError)
    )
)]
pub async fn list_event_products(
    State(state): State<ApiState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<ProductCard>>, PlatformError> {
    let store = state.store()?;

    let docs = get_documents(
        store,
        SaleProduct::COLLECTION,
        event_products_filter(&event_id),
        EVENT_PRODUCTS_LIMIT,
    ).await?;

    Ok(Json(docs.iter().map(ProductCard::from_document).collect()))
}

pub fn products_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/events/:event_id/products", get(list_event_products))
        .with_state(state)
}
