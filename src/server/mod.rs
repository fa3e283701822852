//! HTTP layer
//!
//! Exposes the cached headlines at `GET /news/{category}` and serves the
//! site's static HTML pages. Upstream fetch failures never surface as HTTP
//! errors; the on-demand path degrades to an empty article list just like
//! the background refresher.

mod error;
mod pages;

pub use error::ApiError;

use axum::extract::{Path, State};
use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::get;
use axum::{Json, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::cache::CacheStore;
use crate::news::{Article, NewsClient};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// The cache backing both the on-demand path and the refresher
    pub store: Arc<CacheStore>,
    /// Upstream headline API client
    pub client: Arc<NewsClient>,
    /// Category allow-list
    pub categories: Arc<Vec<String>>,
    /// How old a cache entry may get before the on-demand path refetches
    pub expiry: chrono::Duration,
    /// Directory holding the static HTML pages
    pub public_dir: PathBuf,
}

/// Builds the application router
///
/// Static files under the public directory are served as a fallback,
/// mirroring the page routes registered explicitly.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE]);

    let serve_dir = ServeDir::new(&state.public_dir);

    pages::page_routes()
        .route("/news/{category}", get(news_handler))
        .fallback_service(serve_dir)
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves the application until the process exits
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://localhost:{port}");

    axum::serve(listener, router(state)).await
}

/// On-demand path: serve the cache if fresh, otherwise fetch and cache
///
/// Categories outside the allow-list are rejected with HTTP 400 naming the
/// allowed set. A failed upstream fetch still answers 200 with an empty
/// array; the degraded result is cached with a fresh timestamp.
async fn news_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Article>>, ApiError> {
    if !state.categories.iter().any(|c| c == &category) {
        return Err(ApiError::InvalidCategory {
            allowed: state.categories.join(", "),
        });
    }

    if let Some(articles) = state.store.fresh(&category, state.expiry) {
        info!("Returning cached data for category: {category}");
        return Ok(Json(articles));
    }

    info!("Cache expired or no cache found. Fetching news...");
    let articles = state.client.fetch_headlines(&category).await;
    if let Err(e) = state.store.insert(&category, articles.clone()) {
        error!("Failed to persist cache for category \"{category}\": {e}");
    }

    Ok(Json(articles))
}
