//! API regression tests.
//!
//! Drives the assembled router the way the server does: decode query
//! parameters, validate, simulate, serialize. Covers the status-code
//! mapping, the CORS header, and the dashboard form.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use fleetsim_api::build_router;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let router = build_router();
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let cors = resp
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, cors, body)
}

#[tokio::test]
async fn steady_state_returns_simulation_results() {
    let (status, cors, body) =
        get("/api/v1/steady-state?hosts=1000&apps=10000&mean_instances_per_app=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cors.as_deref(), Some("*"));
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["request"]["hosts"], 1000);
    assert_eq!(data["request"]["apps"], 10000);
    assert_eq!(data["request"]["mean_instances_per_app"], 2);
    assert_eq!(data["mean_instances_per_host"], 20.0);
    assert_eq!(data["apps"].as_array().unwrap().len(), 10000);
    assert_eq!(
        data["instances"].as_array().unwrap().len() as u64,
        data["total_instances"].as_u64().unwrap()
    );
}

#[tokio::test]
async fn steady_state_balances_hosts_within_one() {
    let (status, _, body) =
        get("/api/v1/steady-state?hosts=7&apps=50&mean_instances_per_app=3").await;
    assert_eq!(status, StatusCode::OK);

    let mut per_host: HashMap<u64, u64> = HashMap::new();
    for instance in body["data"]["instances"].as_array().unwrap() {
        *per_host.entry(instance["host_id"].as_u64().unwrap()).or_default() += 1;
    }
    let max = per_host.values().max().unwrap();
    let min = per_host.values().min().unwrap();
    assert!(max - min <= 1, "per-host counts {per_host:?}");
}

#[tokio::test]
async fn steady_state_rejects_out_of_range_parameters() {
    let (status, cors, body) =
        get("/api/v1/steady-state?hosts=123&apps=456&mean_instances_per_app=789").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(cors.as_deref(), Some("*"));
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "validation: mean_instances_per_app must be 1 - 100"
    );
}

#[tokio::test]
async fn steady_state_rejects_malformed_query() {
    // Missing a field entirely.
    let (status, _, body) = get("/api/v1/steady-state?hosts=10&apps=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    // Non-numeric value.
    let (status, _, _) =
        get("/api/v1/steady-state?hosts=ten&apps=10&mean_instances_per_app=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_serves_the_simulation_form() {
    let router = build_router();
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();

    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<form"));
    assert!(html.contains("name=\"hosts\""));
    assert!(html.contains("name=\"apps\""));
    assert!(html.contains("name=\"mean_instances_per_app\""));
}

#[tokio::test]
async fn dashboard_renders_results_for_a_valid_run() {
    let router = build_router();
    let req = Request::builder()
        .uri("/run?hosts=10&apps=30&mean_instances_per_app=2")
        .body(Body::empty())
        .unwrap();

    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Mean instances per host"));
    assert!(html.contains("6.00"));
}

#[tokio::test]
async fn dashboard_echoes_validation_errors_into_the_form() {
    let router = build_router();
    let req = Request::builder()
        .uri("/run?hosts=0&apps=30&mean_instances_per_app=2")
        .body(Body::empty())
        .unwrap();

    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("hosts must be 1 - 1000"));
    assert!(html.contains("<form"));
}
