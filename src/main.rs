use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mediahub::{http, CatalogService, InMemoryModelStore, JsonFileModelStore, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .with_context(|| format!("invalid log filter {:?}", config.log_filter))?,
        )
        .init();

    match &config.data_file {
        Some(path) => {
            let store = JsonFileModelStore::open(path)
                .with_context(|| format!("failed to open catalogue file {}", path.display()))?;
            info!(bind = %config.bind, path = %path.display(), "starting mediahub with file store");
            http::serve(Arc::new(CatalogService::new(store)), config.bind).await?;
        }
        None => {
            info!(bind = %config.bind, "starting mediahub with in-memory store");
            http::serve(
                Arc::new(CatalogService::new(InMemoryModelStore::new())),
                config.bind,
            )
            .await?;
        }
    }

    Ok(())
}
