mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use hashlink_gateway::{telemetry, App, AppState};
use hashlink_generator::{HashPrefixGenerator, HashPrefixSettings};
use hashlink_shortener::ShortenerService;
use hashlink_storage::InMemoryRepository;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    telemetry::init(config.log_format.into())?;

    let settings = HashPrefixSettings::builder()
        .prefix_len(config.prefix_len)
        .build();
    let generator = HashPrefixGenerator::new(settings)?;
    let shortener = ShortenerService::new(InMemoryRepository::new(), generator);
    let state = AppState::new(Arc::new(shortener));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(
        listen_addr = %listener.local_addr()?,
        prefix_len = config.prefix_len,
        log_format = %config.log_format,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server failed")?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
