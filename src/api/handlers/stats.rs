use axum::response::Json;

use crate::{
    api::handlers::common::{compute_statistic, NumsParams},
    ApiError, Operation, StatResponse,
};

pub async fn get_mean(params: NumsParams) -> Result<Json<StatResponse>, ApiError> {
    compute_statistic(Operation::Mean, params)
}

pub async fn get_median(params: NumsParams) -> Result<Json<StatResponse>, ApiError> {
    compute_statistic(Operation::Median, params)
}

pub async fn get_mode(params: NumsParams) -> Result<Json<StatResponse>, ApiError> {
    compute_statistic(Operation::Mode, params)
}
