// CalmCircle Backend Entry Point
// Serves the key-value persistence service used by the wellness app shell.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calmcircle_core::paths::PortablePathManager;
use calmcircle_core::storage::server::KvServerConfig;
use calmcircle_core::storage::{kv, server};

const DEFAULT_ADDR: &str = "127.0.0.1:8787";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    PortablePathManager::init().context("Failed to initialize data directories")?;

    let db_path = PortablePathManager::db_path();
    let pool = kv::init_db(&db_path)
        .await
        .context("Failed to initialize key-value store")?;

    let addr: SocketAddr = std::env::var("CALMCIRCLE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("Invalid CALMCIRCLE_ADDR")?;

    info!(%addr, db = %db_path.display(), "Starting CalmCircle key-value service");

    server::serve(KvServerConfig { addr }, pool)
        .await
        .context("Server exited with an error")?;

    Ok(())
}
