//! Tile task-list generator server.
//!
//! ```bash
//! HOST=127.0.0.1 PORT=5000 RUST_LOG=debug tile-tasks
//! ```

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tile_tasks::{api, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        dev_mode = config.dev_mode,
        "Starting tile task generator"
    );

    api::serve(config).await
}
