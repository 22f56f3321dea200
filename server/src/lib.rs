//! Folio static server
//!
//! Serves the site produced by `cargo leptos build`. Files are served as-is;
//! any other path gets the app shell so the client router can take over.
//! Paths the router knows answer 200, everything else 404.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use folio_core::Route;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Location of the app shell inside the site root.
#[derive(Debug, Clone)]
pub struct SiteRoot {
    index: PathBuf,
}

impl SiteRoot {
    pub fn new(root: &Path) -> Self {
        Self {
            index: root.join("index.html"),
        }
    }
}

/// Create the router serving `root`.
pub fn create_router(root: &Path) -> Router {
    let shell = get(serve_shell).with_state(Arc::new(SiteRoot::new(root)));

    Router::new()
        .fallback_service(ServeDir::new(root).fallback(shell))
        .layer(TraceLayer::new_for_http())
}

/// Status for a path that did not match a file.
pub fn shell_status(path: &str) -> StatusCode {
    if Route::resolve(path).is_known() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn serve_shell(State(site): State<Arc<SiteRoot>>, uri: Uri) -> Response {
    let status = shell_status(uri.path());

    match tokio::fs::read_to_string(&site.index).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(index = %site.index.display(), %err, "app shell unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Site has not been built yet",
            )
                .into_response()
        }
    }
}

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
