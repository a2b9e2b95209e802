//! Casegen Daemon - serves the browser front-end for the test case generator.
//!
//! One HTTP server on localhost: a form page at `/` and a JSON API under
//! `/v1`. Each submit maps to exactly one completion call.

use anyhow::Result;
use casegen_common::Config;
use casegend::server;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("casegend v{} starting", env!("CARGO_PKG_VERSION"));

    // Credentials are checked before the UI becomes reachable
    let config = Config::from_env()?;
    info!("Using model {}", config.model);

    let state = server::AppState::new(config);
    server::run(state).await
}
