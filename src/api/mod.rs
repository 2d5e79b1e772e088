mod handlers;
mod types;
pub use handlers::*;
pub use types::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::get
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use anyhow::Result;
use std::time::Duration;
use crate::ServerConfig;

/// Builds the application router with every route and middleware attached.
pub fn router() -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        // Core endpoints
        .route("/health", get(health_check))

        // Statistic endpoints
        .route("/mean", get(get_mean))
        .route("/median", get(get_median))
        .route("/mode", get(get_mode))
        .layer(cors)
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://localhost:{}", config.port);
    info!("API server listening on {}", addr);

    // Start server
    axum::serve(listener, router())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
