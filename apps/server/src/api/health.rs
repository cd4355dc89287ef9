use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once at least one day of rates is cached. A broken cache answers 500.
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    if state.rates_service.is_ready()? {
        Ok("ok")
    } else {
        Err(ApiError::ServiceUnavailable(
            "rate cache is still empty".to_string(),
        ))
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
