use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use eurofx_core::CurrencyFilter;
use eurofx_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tower::ServiceExt;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/eurofxref-hist.xml")
}

fn app_with(historic_data: PathBuf, currencies: CurrencyFilter) -> Router {
    let config = Config {
        historic_data,
        currencies,
        ..Config::default()
    };
    let state = build_state(&config);
    app_router(state, &config)
}

fn app() -> Router {
    app_with(fixture(), CurrencyFilter::only(["USD", "GBP"]))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, cache_control, json)
}

fn assert_rates(body: &Value, date: &str, expected: &[(&str, f64)]) {
    assert_eq!(body["date"], date, "body: {body}");
    let rates = body["rates"].as_object().expect("rates object");
    assert_eq!(rates.len(), expected.len(), "body: {body}");
    for (currency, rate) in expected {
        assert_eq!(rates[*currency].as_f64(), Some(*rate), "{currency} in {body}");
    }
}

#[tokio::test]
async fn weekday_is_served_as_requested() {
    let (status, cache_control, body) = get(app(), "/2010-07-14").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("max-age=2592000"));
    assert_rates(&body, "2010-07-14", &[("USD", 1.2703), ("GBP", 0.8343)]);
}

#[tokio::test]
async fn trailing_slash_is_served_like_the_bare_date() {
    let (status, cache_control, body) = get(app(), "/2010-07-14/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("max-age=2592000"));
    assert_rates(&body, "2010-07-14", &[("USD", 1.2703), ("GBP", 0.8343)]);

    let (status, _, body) = get(app(), "/2010-07-11/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2010-07-09");
}

#[tokio::test]
async fn sunday_is_served_with_fridays_rates() {
    let (status, _, body) = get(app(), "/2010-07-11").await;

    assert_eq!(status, StatusCode::OK);
    assert_rates(&body, "2010-07-09", &[("USD", 1.2637), ("GBP", 0.836)]);
}

#[tokio::test]
async fn short_holidays_are_skipped() {
    let (status, _, body) = get(app(), "/2013-11-30").await;

    assert_eq!(status, StatusCode::OK);
    assert_rates(&body, "2013-11-29", &[("USD", 1.3611), ("GBP", 0.83275)]);
}

#[tokio::test]
async fn long_holidays_are_skipped() {
    let (status, _, body) = get(app(), "/2001-04-16").await;

    assert_eq!(status, StatusCode::OK);
    assert_rates(&body, "2001-04-12", &[("USD", 0.8849), ("GBP", 0.6173)]);
}

#[tokio::test]
async fn dates_before_the_series_are_bad_requests() {
    let (status, cache_control, body) = get(app(), "/1998-01-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(cache_control, None);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("1998-01-01"));
}

#[tokio::test]
async fn future_dates_are_bad_requests() {
    let (status, _, _) = get(app(), "/2999-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_dates_are_bad_requests() {
    for uri in ["/2010-7-14", "/yesterday", "/2010-02-30", "/14.07.2010"] {
        let (status, _, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 400, "{uri}");
    }
}

#[tokio::test]
async fn empty_cache_has_no_data() {
    let missing = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/missing.xml");
    let app = app_with(missing, CurrencyFilter::All);

    let (status, _, body) = get(app.clone(), "/2010-07-14").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let (status, _, _) = get(app, "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn dates_before_the_first_loaded_day_have_no_data() {
    let (status, _, _) = get(app(), "/2000-06-01").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn single_currency_lookup_falls_back_too() {
    let (status, cache_control, body) = get(app(), "/2010-07-11/usd").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("max-age=2592000"));
    assert_eq!(body["date"], "2010-07-09");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["rate"].as_f64(), Some(1.2637));
}

#[tokio::test]
async fn base_currency_is_always_one() {
    let (status, _, body) = get(app(), "/2013-12-01/EUR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2013-11-29");
    assert_eq!(body["rate"].as_f64(), Some(1.0));
}

#[tokio::test]
async fn unconfigured_currencies_are_not_served() {
    let (status, _, _) = get(app(), "/2010-07-14/JPY").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let all = app_with(fixture(), CurrencyFilter::All);
    let (status, _, body) = get(all.clone(), "/2010-07-14/JPY").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rate"].as_f64(), Some(112.18));

    let (_, _, body) = get(all, "/2010-07-14").await;
    assert_rates(
        &body,
        "2010-07-14",
        &[("USD", 1.2703), ("JPY", 112.18), ("GBP", 0.8343), ("CHF", 1.3397)],
    );
}
