use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// Configuration error in the route table, detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
    #[error("route table has no default route (empty path)")]
    MissingDefaultRoute,
    #[error("malformed route path '{path}': {reason}")]
    MalformedPath { path: String, reason: &'static str },
    #[error("route path '{0}' collides with a reserved service path")]
    ReservedPath(String),
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and a JSON body of the form
/// `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Query parameter missing or unusable
    InvalidQueryParam(String),
    /// No route table entry for the path
    RouteNotFound(String),
    /// Request for an endpoint that does not exist
    EndpointNotFound(String),
    /// HTML template failed to render
    Render(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("Route not found: '{}'", path),
            ),
            ApiError::EndpointNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("No endpoint at {}", path),
            ),
            ApiError::Render(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
