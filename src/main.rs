mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod navigation;
mod route_table;
mod routes;
mod state;
mod views;

use anyhow::Context;
use config::Config;
use route_table::RouteTable;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("certificate-manager-front starting");

    let config = Config::from_env()?;
    config.log_startup();

    let route_table = RouteTable::app().context("Invalid route table")?;
    let bind_address = config.bind_address();
    let app = navigation::register(AppState::new(route_table, config))
        .context("Failed to register navigation routes")?;

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("certificate-manager-front stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
