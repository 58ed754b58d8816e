#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = config::ServerConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::app(state, config.cors_permissive)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, upstream = %config.api_url, "lms host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
