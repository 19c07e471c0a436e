use serde::{Deserialize, Serialize};

use crate::route_table::RouteEntry;
use crate::views::View;

/// A single route table entry
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteEntryResponse {
    pub path: String,
    pub view: View,
}

impl From<&RouteEntry> for RouteEntryResponse {
    fn from(entry: &RouteEntry) -> Self {
        RouteEntryResponse {
            path: entry.path.to_string(),
            view: entry.view,
        }
    }
}

/// Response type for the route listing endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteListResponse {
    pub data: Vec<RouteEntryResponse>,
    pub total_count: usize,
}

/// Query parameters for the resolve endpoint
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// Navigated path, e.g. `verification/mail`; empty for the landing route
    pub path: Option<String>,
}

/// Response type for successful resolution
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResolveResponse {
    pub path: String,
    pub view: View,
}
