//! HTTP server for casegend

use crate::routes;
use anyhow::Result;
use axum::Router;
use casegen_common::{CompletionClient, Config};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Default bind address; localhost only.
pub const DEFAULT_ADDR: &str = "127.0.0.1:7870";

/// Application state shared across handlers.
///
/// Holds only the immutable config and client handle; no state survives a
/// request.
pub struct AppState {
    pub client: CompletionClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            client: CompletionClient::new(config),
        }
    }
}

/// Build the full router for the daemon.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::ui_routes())
        .merge(routes::api_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server.
pub async fn run(state: AppState) -> Result<()> {
    let app = app(state);

    let addr =
        std::env::var("CASEGEND_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
