mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "portfolio_server=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.to_string(), source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
