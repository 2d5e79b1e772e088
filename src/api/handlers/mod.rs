// Submodules
pub mod common;  // Shared parse/compute/respond pipeline
pub mod health;  // Health check endpoint
pub mod stats;   // Statistic endpoints

// Re-exports
pub use health::health_check;
pub use stats::{get_mean, get_median, get_mode};
