//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use clean_cook_sizing::api::{AppState, router};
use clean_cook_sizing::config::SizingConfig;
use clean_cook_sizing::sizing::calculate;

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(Arc::new(AppState::default()));
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_size(body: String) -> (StatusCode, serde_json::Value) {
    let app = router(Arc::new(AppState::default()));
    let req = Request::builder()
        .method("POST")
        .uri("/size")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn size_matches_library_result() {
    let request = common::kettle_request();
    let expected = calculate(&request).unwrap();

    let (status, json) = post_size(serde_json::to_string(&request).unwrap()).await;
    assert_eq!(status, StatusCode::OK);

    let served: clean_cook_sizing::sizing::SizingResult =
        serde_json::from_value(json["result"].clone()).unwrap();
    assert_eq!(served, expected);
    assert_eq!(json["chart"]["title"], "System Requirements");
}

#[tokio::test]
async fn rejected_request_carries_kind_and_field() {
    let body = serde_json::to_string(&common::zero_solar_request()).unwrap();
    let (status, json) = post_size(body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "division_by_zero");
    assert!(json["error"].as_str().unwrap().contains("solar_panel_efficiency"));
}

#[tokio::test]
async fn nonstandard_voltage_is_invalid_input() {
    let body = r#"{"appliance_power_watts":700,"appliance_voltage_volts":36,
        "cook_duration_hours":1.0,"inverter_efficiency":0.9,
        "solar_panel_efficiency":0.22}"#;
    let (status, json) = post_size(body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "invalid_input");
}

#[tokio::test]
async fn overflowing_request_is_rejected_not_null() {
    let body = r#"{"appliance_power_watts":1e308,"appliance_voltage_volts":24,
        "cook_duration_hours":5.0,"inverter_efficiency":0.9,
        "solar_panel_efficiency":0.22}"#;
    let (status, json) = post_size(body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "invalid_input");
    assert!(json["error"].as_str().unwrap().contains("overflows"));
}

#[tokio::test]
async fn malformed_json_is_client_error() {
    let app = router(Arc::new(AppState::default()));
    let req = Request::builder()
        .method("POST")
        .uri("/size")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"appliance_power_watts":"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error(), "status={}", resp.status());
}

#[tokio::test]
async fn presets_list_and_size_every_name() {
    let (status, json) = get_json("/presets").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_value(json).unwrap();
    assert_eq!(names, SizingConfig::PRESETS);

    for name in &names {
        let (status, json) = get_json(&format!("/presets/{name}")).await;
        assert_eq!(status, StatusCode::OK, "preset {name}");
        assert!(json["result"]["battery_size_ah"].as_f64().unwrap() > 0.0);
    }
}

#[tokio::test]
async fn controls_report_slider_defaults() {
    let (status, json) = get_json("/controls").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["power_watts"]["default"], 700.0);
    assert_eq!(json["voltage_volts"]["default"], 24);
    assert_eq!(json["solar_panel_pct"]["min"], 0.0);
}
