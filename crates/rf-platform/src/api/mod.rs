//! API Layer
//!
//! Public HTTP routes for the landing page.

pub mod common;
pub mod extract;
pub mod projection;
pub mod state;

pub mod health;
pub mod events;
pub mod products;
pub mod subscribe;
pub mod openapi;

pub use common::*;
pub use extract::ValidatedJson;
pub use state::ApiState;

pub use health::{health_router, DatabaseDiagnostics};
pub use events::{events_router, EventCard};
pub use products::{products_router, ProductCard};
pub use subscribe::{subscribe_router, SubscribePayload, SubscribeResponse};
pub use openapi::RunFlashApiDoc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full application router: all routes, OpenAPI/Swagger UI, request tracing
/// and a CORS policy that mirrors the caller's origin and allows credentials.
pub fn platform_router(state: ApiState) -> Router {
    Router::new()
        .merge(health_router(state.clone()))
        .merge(events_router(state.clone()))
        .merge(products_router(state.clone()))
        .merge(subscribe_router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/q/openapi", RunFlashApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
