//! HTTP JSON API over the sizing calculator.
//!
//! Endpoints:
//! - `POST /size`: size a request body
//! - `GET /presets`: list preset names
//! - `GET /presets/{name}`: size a built-in preset
//! - `GET /controls`: input control ranges

mod handlers;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::controls::ControlSet;

/// Immutable application state shared across all request handlers.
///
/// Every request is sized independently; nothing here changes after
/// startup, so it is shared through `Arc` without locks.
#[derive(Debug, Default)]
pub struct AppState {
    /// Control ranges served by `/controls`.
    pub controls: ControlSet,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/size", post(handlers::post_size))
        .route("/presets", get(handlers::list_presets))
        .route("/presets/{name}", get(handlers::get_preset))
        .route("/controls", get(handlers::get_controls))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
