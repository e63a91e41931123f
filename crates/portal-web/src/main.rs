//! article-portal server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use portal_client::{parse_env_or, JsonApiClient};
use portal_core::defaults;
use portal_web::telemetry::{self, LogSettings};
use portal_web::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _file_guard = telemetry::init(&LogSettings::from_env());

    let client = JsonApiClient::from_env()?;
    let image_base_url = client.config().image_base_url.clone();

    let state = AppState::new(Arc::new(client), image_base_url);
    let app = router(state);

    let host = std::env::var(defaults::ENV_HOST).unwrap_or_else(|_| defaults::SERVER_HOST.to_string());
    let port: u16 = parse_env_or(defaults::ENV_PORT, defaults::SERVER_PORT);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
