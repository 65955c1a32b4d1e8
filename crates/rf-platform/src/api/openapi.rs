//! OpenAPI Documentation

use utoipa::OpenApi;

/// RunFlash API OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RunFlash API",
        version = "0.1.0",
        description = "Public endpoints for flash-sale events, products and subscribers"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development")
    ),
    tags(
        (name = "health", description = "Liveness and database diagnostics"),
        (name = "events", description = "Sale events"),
        (name = "products", description = "Sale products"),
        (name = "subscribers", description = "Email capture")
    ),
    paths(
        super::health::read_root,
        super::health::test_database,
        super::events::list_events,
        super::products::list_event_products,
        super::subscribe::subscribe,
    ),
    components(
        schemas(
            super::common::ApiError,
            super::common::MessageResponse,
            super::health::DatabaseDiagnostics,
            super::events::EventCard,
            crate::domain::EventStatus,
            super::products::ProductCard,
            super::subscribe::SubscribePayload,
            super::subscribe::SubscribeResponse,
        )
    )
)]
pub struct RunFlashApiDoc;
