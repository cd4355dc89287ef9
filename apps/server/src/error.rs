use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eurofx_core::errors::Error as CoreError;
use eurofx_core::RatesError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Rates(e)) => match e {
                RatesError::MalformedDate(_)
                | RatesError::OutOfRange { .. }
                | RatesError::UnknownCurrency(_) => StatusCode::BAD_REQUEST,
                RatesError::NoDataAvailable(_) => StatusCode::NOT_FOUND,
                RatesError::CacheError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<RatesError> for ApiError {
    fn from(err: RatesError) -> Self {
        ApiError::Core(CoreError::Rates(err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
