use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::UnmatchedRoute;
use crate::error::{ApiError, RouteTableError};
use crate::handlers;
use crate::route_table::navigated_path;
use crate::routes;
use crate::state::AppState;

/// Make the route table the application's active navigation configuration.
///
/// Every table entry becomes a GET route serving the shell of its view,
/// next to the service endpoints and the OpenAPI docs. Paths the table
/// does not know fall through to the unmatched-route policy.
///
/// # Errors
/// Returns [`RouteTableError::ReservedPath`] if a navigation route would
/// shadow a service endpoint. Nothing is registered in that case.
pub fn register(state: AppState) -> Result<Router, RouteTableError> {
    let table = Arc::clone(&state.route_table);
    let mut router = Router::new();

    for entry in table.entries() {
        let first_segment = entry.path.split('/').next().unwrap_or_default();
        if routes::RESERVED_SEGMENTS.contains(&first_segment) {
            return Err(RouteTableError::ReservedPath(entry.path.to_string()));
        }

        let view = entry.view;
        router = router.route(
            &entry.url(),
            get(move |State(state): State<AppState>| handlers::view_handler(state, view)),
        );
        tracing::debug!("Registered route {} -> {}", entry.url(), view);
    }

    tracing::info!("Registered {} navigation routes", table.len());

    let router = router
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ROUTE_LIST, get(handlers::list_handler))
        .route(routes::ROUTE_RESOLVE, get(handlers::resolve_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(unmatched_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Fallback for any path without a route.
async fn unmatched_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();

    if routes::is_api_path(path) {
        return ApiError::EndpointNotFound(path.to_string()).into_response();
    }

    match state.config.unmatched_route {
        UnmatchedRoute::Redirect => {
            tracing::info!("Unmatched path {}, redirecting to landing route", path);
            Redirect::to("/").into_response()
        }
        UnmatchedRoute::NotFound => {
            tracing::info!("Unmatched path {}", path);
            ApiError::RouteNotFound(navigated_path(path).to_string()).into_response()
        }
    }
}
