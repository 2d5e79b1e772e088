pub mod api;
pub mod config;
pub mod error;
pub mod stats;

#[cfg(test)]
mod tests;

pub use api::*;
pub use config::*;
pub use error::*;
pub use stats::*;

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
