use auris_config::FrontendConfig;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Router hosting the built frontend
///
/// Serves `index.html` at `/` and the `static/` subdirectory under
/// `/static`, mirroring a standard React build layout. A missing build
/// directory is not a startup failure; affected requests 404.
pub fn frontend_router(config: &FrontendConfig) -> Router {
    if !config.dir.is_dir() {
        tracing::warn!(dir = %config.dir.display(), "frontend directory not found, requests will 404");
    }

    let index = config.dir.join("index.html");
    let assets = config.dir.join("static");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .nest_service("/static", ServeDir::new(assets))
}
