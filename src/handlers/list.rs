use crate::models::{RouteEntryResponse, RouteListResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/routes handler - List the route table
///
/// Entries are returned in declaration order.
#[utoipa::path(
    get,
    path = routes::ROUTE_LIST,
    responses(
        (status = 200, description = "The navigation route table", body = RouteListResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<RouteListResponse>) {
    let data: Vec<RouteEntryResponse> = state
        .route_table
        .entries()
        .iter()
        .map(RouteEntryResponse::from)
        .collect();

    tracing::debug!("Listing {} routes", data.len());

    let total_count = data.len();
    (StatusCode::OK, Json(RouteListResponse { data, total_count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_state;
    use crate::views::View;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_list_endpoint_returns_table_in_order() {
        let app = Router::new()
            .route(crate::routes::ROUTE_LIST, get(list_handler))
            .with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/routes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let list: RouteListResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(list.total_count, 5);
        let pairs: Vec<(&str, View)> = list
            .data
            .iter()
            .map(|entry| (entry.path.as_str(), entry.view))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("login", View::Login),
                ("", View::Login),
                ("register", View::Registration),
                ("verification/mail", View::MailVerification),
                ("verification", View::VerificationChoice),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_serializes_view_identifiers() {
        let app = Router::new()
            .route(crate::routes::ROUTE_LIST, get(list_handler))
            .with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/routes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"][3]["path"], "verification/mail");
        assert_eq!(json["data"][3]["view"], "MailVerification");
    }
}
