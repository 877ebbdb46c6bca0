//! Employee API server binary

use anyhow::Result;
use employee_api::config::ServerConfig;
use employee_api::server::ServerBuilder;
use employee_api::storage::InMemoryEmployeeStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!(
        address = %config.bind_address(),
        cors = config.cors_allow_all,
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_config(config)
        .with_service(InMemoryEmployeeStore::new())
        .serve()
        .await
}
