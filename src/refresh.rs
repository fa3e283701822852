//! Background cache refresh system
//!
//! Runs one staleness pass over all allowed categories at startup, then
//! re-runs the same pass on a fixed timer equal to the cache expiry window.
//! Categories are paced one second apart to avoid bursting the upstream API;
//! the pacing interval equals the rate-limit backoff delay.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::cache::CacheStore;
use crate::news::{cache_expiry, NewsClient};

/// Configuration for the background refresh loop
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// How old an entry may get before it is refreshed; also the period of
    /// the background timer
    pub expiry: chrono::Duration,
    /// Delay between categories within one pass
    pub pacing: Duration,
    /// Whether the background loop runs at all
    pub enabled: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            expiry: cache_expiry(),
            pacing: Duration::from_secs(1),
            enabled: true,
        }
    }
}

/// Handle for controlling the background refresh task
pub struct RefreshHandle {
    /// Channel used to signal shutdown
    shutdown_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Spawns the background refresh task
    ///
    /// Runs an immediate pass, then repeats on a timer with period equal to
    /// the expiry window. The task runs for the life of the process unless
    /// [`RefreshHandle::shutdown`] is called.
    pub fn spawn(
        config: RefreshConfig,
        store: Arc<CacheStore>,
        client: Arc<NewsClient>,
        categories: Vec<String>,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        if config.enabled {
            tokio::spawn(async move {
                let period = config
                    .expiry
                    .to_std()
                    .unwrap_or(Duration::from_secs(60 * 60));
                let mut interval = tokio::time::interval(period);
                // The first tick fires immediately, giving the startup pass
                interval.tick().await;

                refresh_pass(&store, &client, &categories, &config).await;

                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            refresh_pass(&store, &client, &categories, &config).await;
                        }
                        _ = shutdown_rx.recv() => {
                            break;
                        }
                    }
                }
            });
        }

        Self { shutdown_tx }
    }

    /// Shuts down the background refresh task
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Refreshes every category whose cache entry is absent or expired
///
/// Even an empty fetch result is cached with a fresh timestamp, so a failing
/// upstream is retried at the next expiry rather than on every request.
pub async fn refresh_pass(
    store: &CacheStore,
    client: &NewsClient,
    categories: &[String],
    config: &RefreshConfig,
) {
    info!("Running refresh pass over {} categories", categories.len());

    for category in categories {
        if store.is_stale(category, config.expiry) {
            info!("Fetching news for category: {category}");
            let articles = client.fetch_headlines(category).await;
            if let Err(e) = store.insert(category, articles) {
                error!("Failed to persist cache for category \"{category}\": {e}");
            }
        } else {
            debug!("Using cached data for category: {category}");
        }

        tokio::time::sleep(config.pacing).await;
    }
}
