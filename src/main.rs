mod domain;
mod config;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod product_actor;
mod catalog;
mod rpc;

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use crate::app_system::{setup_tracing, shutdown_signal, CatalogSystem, SystemError};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = Config::parse();
    setup_tracing(&config.logging)?;

    info!(channel_capacity = config.channel_capacity.get(), "Starting products microservice");

    let system = CatalogSystem::start(config.channel_capacity.get());

    let handled = rpc::serve(
        system.catalog.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        shutdown_signal(),
    )
    .await?;
    info!(handled, "Stopped serving packets");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
