// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{Result, bail};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use trekking_node::{Config, StoreKind, router};
use trekking_store::{GroupStore, MemoryStore, SqliteStoreBuilder};

pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let config = Config::parse();

    match config.store {
        StoreKind::Memory => {
            info!("using in-memory store");
            serve(&config, MemoryStore::new()).await
        }
        StoreKind::Sqlite => {
            if !config.location.is_dir() {
                bail!("directory {} does not exist", config.location.display());
            }

            let path = config.database_file();
            info!("using sqlite store at {}", path.display());

            let store = SqliteStoreBuilder::new()
                .database_file(&path)
                .build()
                .await?;
            let result = serve(&config, store.clone()).await;
            store.close().await;
            result
        }
    }
}

async fn serve<S>(config: &Config, store: S) -> Result<()>
where
    S: GroupStore + Clone + Send + Sync + 'static,
{
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("running server on {}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl-C, in-flight requests are completed before the server stops.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("could not listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }

    info!("shutting down");
}
