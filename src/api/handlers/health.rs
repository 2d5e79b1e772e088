use axum::response::Json;
use time::OffsetDateTime;
use crate::{HealthResponse, Operation};

/// Liveness probe; also advertises which statistics the service computes.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
        operations: Operation::ALL.map(|op| op.as_str()).to_vec(),
        timestamp: OffsetDateTime::now_utc().to_string(),
    })
}
