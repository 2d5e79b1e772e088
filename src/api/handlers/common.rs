use axum::extract::{rejection::QueryRejection, Query};
use axum::response::Json;
use tracing::{info, warn};

use crate::{parse_nums, ApiError, NumsQuery, Operation, StatResponse};

pub type NumsParams = Result<Query<NumsQuery>, QueryRejection>;

/// Runs one request through parse, validate, compute.
pub fn compute_statistic(
    operation: Operation,
    params: NumsParams,
) -> Result<Json<StatResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Malformed {} query: {}", operation, rejection.body_text());
        ApiError::MalformedQuery(rejection.body_text())
    })?;

    let nums = parse_nums(params.nums.as_deref()).map_err(|e| {
        warn!("Rejected {} request: {}", operation, e);
        e
    })?;

    let value = operation.compute(&nums)?;

    info!("Computed {} over {} values", operation, nums.len());

    Ok(Json(StatResponse { operation, value }))
}
