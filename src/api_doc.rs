use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{RouteEntryResponse, RouteListResponse, ResolveResponse};
use crate::views::View;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "certificate-manager-front API",
        version = "1.0.0",
        description = "Navigation routes of the certificate manager front end"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::resolve::resolve_handler
    ),
    components(
        schemas(
            View,
            RouteEntryResponse,
            RouteListResponse,
            ResolveResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route table operations")
    )
)]
pub struct ApiDoc;
