//! W3S Web Server
//!
//! Axum-based HTTP server backing the browser front end: one analysis
//! endpoint plus static file serving with a single-page-app fallback.

pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::{routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use state::AppState;
use w3s_masa::MasaClient;

/// Create the application router.
///
/// `app_dir` holds the static front end; any path not matching the API
/// falls back to its `index.html`.
pub fn create_router(state: AppState, app_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // not_found_service would keep the 404 status; the catch-all must
    // answer 200 with the entry page for client-side routes.
    let frontend = ServeDir::new(app_dir).fallback(ServeFile::new(app_dir.join("index.html")));

    Router::new()
        .route("/api/analyze", post(routes::analyze::analyze))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    client: Arc<MasaClient>,
    app_dir: &Path,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(client);
    let app = create_router(state, app_dir);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Web server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
