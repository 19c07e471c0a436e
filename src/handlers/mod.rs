pub mod health;
pub mod list;
pub mod resolve;
pub mod view;

pub use health::health_handler;
pub use list::list_handler;
pub use resolve::resolve_handler;
pub use view::view_handler;

#[cfg(test)]
pub(crate) fn test_state() -> crate::state::AppState {
    let route_table = crate::route_table::RouteTable::app().expect("app route table is valid");
    crate::state::AppState::new(route_table, crate::config::Config::default())
}
