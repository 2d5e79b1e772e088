use anyhow::Result;
use clap::Parser;
use stats_api::{init_logging, serve, ServerConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    // Parse command line arguments
    let config = ServerConfig::parse();

    info!("Starting stats API server on {}:{}", config.host, config.port);

    if let Err(e) = serve(config).await {
        error!("Server failed: {}", e);
        return Err(e);
    }

    Ok(())
}
