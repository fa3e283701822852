//! Newsdesk binary - wires config, cache, refresher, and HTTP server

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use newsdesk::cache::CacheStore;
use newsdesk::cli::Cli;
use newsdesk::config::Config;
use newsdesk::news::{cache_expiry, NewsClient};
use newsdesk::refresh::{RefreshConfig, RefreshHandle};
use newsdesk::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    cli.apply(&mut config);

    let store = Arc::new(CacheStore::load(config.cache_file.clone()));
    info!(
        "Loaded cache from {} ({} categories)",
        store.path().display(),
        store.len()
    );

    let client = Arc::new(NewsClient::new(config.api_key.clone()));

    // Hold the handle so the background refresher keeps its shutdown channel
    let _refresh = RefreshHandle::spawn(
        RefreshConfig::default(),
        store.clone(),
        client.clone(),
        config.categories.clone(),
    );

    let state = AppState {
        store,
        client,
        categories: Arc::new(config.categories.clone()),
        expiry: cache_expiry(),
        public_dir: config.public_dir.clone(),
    };

    server::serve(state, config.port).await?;

    Ok(())
}
