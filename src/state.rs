use crate::config::Config;
use crate::route_table::RouteTable;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub route_table: Arc<RouteTable>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(route_table: RouteTable, config: Config) -> Self {
        Self {
            route_table: Arc::new(route_table),
            config: Arc::new(config),
        }
    }
}
