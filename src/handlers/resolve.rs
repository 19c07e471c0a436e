use crate::error::{ApiError, ErrorResponse};
use crate::models::{ResolveQuery, ResolveResponse};
use crate::route_table::navigated_path;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

/// GET /api/routes/resolve handler - Resolve a path to its view
///
/// Matching is exact; a single leading slash on `path` is ignored so
/// both `verification/mail` and `/verification/mail` resolve.
#[utoipa::path(
    get,
    path = routes::ROUTE_RESOLVE,
    params(ResolveQuery),
    responses(
        (status = 200, description = "Path resolved", body = ResolveResponse),
        (status = 400, description = "Missing or malformed path parameter", body = ErrorResponse),
        (status = 404, description = "No route for the path", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ResolveResponse>), ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::InvalidQueryParam(rejection.body_text()))?;
    let raw = query
        .path
        .ok_or_else(|| ApiError::InvalidQueryParam("path is required".to_string()))?;
    let path = navigated_path(&raw);

    match state.route_table.resolve(path) {
        Some(view) => {
            tracing::debug!("Resolved '{}' to {}", path, view);
            Ok((
                StatusCode::OK,
                Json(ResolveResponse {
                    path: path.to_string(),
                    view,
                }),
            ))
        }
        None => {
            tracing::info!("No route for '{}'", path);
            Err(ApiError::RouteNotFound(path.to_string()))
        }
    }
}
