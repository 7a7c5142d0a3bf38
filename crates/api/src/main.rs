//! Weather Rule Pipeline - Main Entry Point

use api::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Weather Rule Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting weather prediction service...");

    let addr = "0.0.0.0:8080";
    run_server(addr).await?;

    Ok(())
}
