use crate::error::ApiError;
use crate::state::AppState;
use crate::views::View;
use askama::Template;
use axum::response::Html;

/// Application shell served for every navigation route.
#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    app_title: &'a str,
    view: View,
}

/// GET handler for a navigation route - serve the application shell for `view`
///
/// The shell carries the view identifier in `data-view`; everything the
/// view does after that happens in the browser.
pub async fn view_handler(state: AppState, view: View) -> Result<Html<String>, ApiError> {
    tracing::debug!("Serving shell for view {}", view);
    render_shell(&state.config.app_title, view).map(Html)
}

fn render_shell(app_title: &str, view: View) -> Result<String, ApiError> {
    ShellTemplate { app_title, view }
        .render()
        .map_err(|e| ApiError::Render(e.to_string()))
}
