use std::env;
use std::error::Error;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use auction_fees::api::{AppState, create_router};
use auction_fees::config::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};

/// Overrides `server.bind_address` from the settings file.
const BIND_ADDRESS_ENV: &str = "AUCTION_BIND_ADDRESS";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;
    info!(path = %config_path, "Loaded configuration");

    let bind_address: SocketAddr = match env::var(BIND_ADDRESS_ENV) {
        Ok(addr) => addr.parse()?,
        Err(_) => config.server().bind_address,
    };

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!(address = %listener.local_addr()?, "Auction fee API listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Auction fee API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
