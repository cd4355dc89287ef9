use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use eurofx_core::utils::time_utils::parse_rate_date;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{RateResponse, RatesResponse},
};

/// Published rates never change, so clients may keep them for 30 days.
pub const CACHE_CONTROL: &str = "max-age=2592000";

async fn get_rates(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let date = parse_rate_date(&date)?;
    let query = state.rates_service.get_rates(date)?;
    if query.is_fallback() {
        tracing::debug!("No rates for {}, served {}", query.requested, query.date);
    }
    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(RatesResponse::from(query)),
    ))
}

async fn get_rate(
    Path((date, currency)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let date = parse_rate_date(&date)?;
    let quote = state.rates_service.get_rate(date, &currency)?;
    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(RateResponse::from(quote)),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{date}", get(get_rates))
        .route("/{date}/", get(get_rates))
        .route("/{date}/{currency}", get(get_rate))
}
