//! Router tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::create_router;
use crate::models::ScheduleResponse;
use crate::AppState;
use autocare_core::logic::scheduling::SchedulingPolicy;

/// The shared estimator is trained by the first test; later builds reuse it
fn app() -> Router {
    create_router(AppState::build(Config::default()).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn reference_body() -> Value {
    json!({
        "engine_temp": 92,
        "battery_voltage": 12.0,
        "brake_wear": 55,
        "oil_pressure": 38,
        "coolant_level": 75,
        "rpm": 2500
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_trees"], 120);
}

#[tokio::test]
async fn test_assess_reference_vehicle() {
    let (status, body) = send(app(), post_json("/api/v1/vehicle/assess", reference_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["health"]["overall"], 90);
    assert_eq!(body["status"], "normal");
    let p = body["failure_probability"].as_f64().unwrap();
    assert!((0.0..0.7).contains(&p));
}

#[tokio::test]
async fn test_assess_missing_field_is_bad_request() {
    let mut payload = reference_body();
    payload.as_object_mut().unwrap().remove("oil_pressure");

    let (status, body) = send(app(), post_json("/api/v1/vehicle/assess", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("oil_pressure"));
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_assess_non_numeric_field_is_bad_request() {
    let mut payload = reference_body();
    payload["rpm"] = json!("fast");

    let (status, _) = send(app(), post_json("/api/v1/vehicle/assess", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assess_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/vehicle/assess")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_schedule_failing_vehicle() {
    let payload = json!({
        "engine_temp": 118,
        "battery_voltage": 10.8,
        "brake_wear": 92,
        "oil_pressure": 22,
        "coolant_level": 48,
        "rpm": 4700
    });

    let (status, body) = send(app(), post_json("/api/v1/schedule", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let response: ScheduleResponse = serde_json::from_value(body).unwrap();
    assert!(response.plan.is_scheduled());
    assert!(response.summary.contains("Hyderabad Service Hub"));
}

#[tokio::test]
async fn test_schedule_with_unusable_lead_time_is_server_error() {
    let config = Config {
        scheduling: SchedulingPolicy {
            service_hub: "Hyderabad Service Hub".to_string(),
            lead_days: 100_000_000,
        },
        ..Config::default()
    };
    let app = create_router(AppState::build(config).unwrap());
    let payload = json!({
        "engine_temp": 118,
        "battery_voltage": 10.8,
        "brake_wear": 92,
        "oil_pressure": 22,
        "coolant_level": 48,
        "rpm": 4700
    });

    let (status, body) = send(app, post_json("/api/v1/schedule", payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn test_schedule_healthy_vehicle() {
    let (status, body) = send(app(), post_json("/api/v1/schedule", reference_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["decision"], "not_required");
    assert_eq!(body["summary"], "No service required");
}

#[tokio::test]
async fn test_fleet_summary() {
    let (status, body) = send(app(), get("/api/v1/fleet/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fleet_size"], 500);
    assert!(body["predicted_failures"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_manufacturing_feedback() {
    let (status, body) = send(app(), get("/api/v1/fleet/manufacturing")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_default_vehicle_and_engine_status() {
    let router = app();
    let (status, body) = send(router.clone(), get("/api/v1/vehicle/default")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["telemetry"]["rpm"], 2500);

    let (status, body) = send(router, get("/api/v1/engine/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_loaded"], true);
    assert!(body["inference_count"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = send(app(), get("/api/v1/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.port, 8080);
    assert!(!config.is_production());
}
