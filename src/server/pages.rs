//! Static HTML page routes
//!
//! Each site page maps a request path to a named HTML file under the public
//! directory. A missing file answers 404; everything else under the public
//! directory is covered by the `ServeDir` fallback in the router.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tracing::warn;

use super::{ApiError, AppState};

/// Site page routes and the HTML file each one serves
const PAGES: &[(&str, &str)] = &[
    ("/Home", "index.html"),
    ("/About-us", "about-us.html"),
    ("/Contact", "contact.html"),
    ("/Acknowledgements", "Acknowledgements.html"),
    ("/Business", "business.html"),
    ("/Economics", "economics.html"),
    ("/Entertainment", "entertainment.html"),
    ("/Finance", "finance.html"),
    ("/Politics", "Politics.html"),
    ("/Privacy-Policy", "privacypolicy.html"),
    ("/Science", "science.html"),
    ("/Sports", "sports.html"),
    ("/Tech", "tech.html"),
    ("/World", "World.html"),
    ("/Terms-and-Conditions", "Termsandconditions.html"),
];

/// Builds a router with one route per site page
pub(super) fn page_routes() -> Router<AppState> {
    let mut router = Router::new();
    for &(route, file) in PAGES {
        router = router.route(
            route,
            get(move |State(state): State<AppState>| async move {
                serve_page(&state.public_dir, file).await
            }),
        );
    }
    router
}

/// Reads one HTML file from the public directory
async fn serve_page(public_dir: &Path, file: &str) -> Result<Html<String>, ApiError> {
    let path = public_dir.join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(e) => {
            warn!("Failed to read page {}: {e}", path.display());
            Err(ApiError::PageNotFound)
        }
    }
}
