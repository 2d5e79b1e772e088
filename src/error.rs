use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Failures raised while turning a `nums` parameter into a statistic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("nums are required")]
    MissingInput,

    #[error("{0} is not a number")]
    InvalidNumber(String),

    #[error("cannot compute a statistic of no numbers")]
    EmptyInput,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("{0}")]
    MalformedQuery(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        // Every defined failure is the caller's fault.
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
