use std::net::SocketAddr;

use slot_booking::config::Config;
use slot_booking::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    let app_state = initialize_backend(&config);
    let app = create_router(app_state, &config)?;

    let addr = SocketAddr::from((config.bind_address, config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
