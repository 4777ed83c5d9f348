//! Integration tests for the assessment HTTP API.
//!
//! Drives the fully assembled router the way the server binary builds it.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rider_profile::adapters::http::{api_router, AssessmentAppState};
use rider_profile::config::{AppConfig, AssessmentConfig, FeatureFlags};

fn app() -> Router {
    let config = AppConfig {
        assessment: AssessmentConfig {
            reference_year: Some(2025),
        },
        features: FeatureFlags {
            enable_calibration_endpoint: true,
            ..Default::default()
        },
        ..Default::default()
    };
    api_router(AssessmentAppState::new(
        config.assessment.calculator(),
        config.features,
    ))
}

async fn call(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn calculate(answers: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/questionnaire/calculate-3d-profile")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "answers": answers }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn start_year_is_resolved_against_configured_reference_year() {
    let (status, value) = call(calculate(json!({ "e1_start_year": 2018 }))).await;

    assert_eq!(status, StatusCode::OK);
    // 7 years of riding -> +4 on the skill baseline
    assert_eq!(value["profile"]["axes"]["technicalSkills"], json!(6.0));
}

#[tokio::test]
async fn cautious_expert_round_trip() {
    let (status, value) = call(calculate(json!({
        "e1_3": 7,
        "e0_riding_year": "2010",
        "e4_2": "В повному екіпі",
        "e7_1": "40-70 км/год",
        "e7_2": "Легко, як філіжанку кави",
        "e9_1": "Розслабити руки, не гальмувати"
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    let classification = &value["profile"]["classification"];
    assert_eq!(classification["type"], json!("CAUTIOUS_EXPERT"));
    assert_eq!(classification["displayName"], json!("Cautious Expert"));
    assert_eq!(classification["recommendations"], json!([]));
    assert_eq!(value["profile"]["metrics"]["dangerLevel"], json!("LOW"));
    assert_eq!(value["profile"]["visualization"]["color"], json!("#22c55e"));
}

#[tokio::test]
async fn non_object_answers_are_rejected() {
    let (status, value) = call(calculate(json!(["e1_1", "20-30"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["message"], json!("Invalid data format"));
}

#[tokio::test]
async fn calibration_and_health_are_mounted() {
    let (status, value) = call(
        Request::builder()
            .uri("/api/questionnaire/calibration")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["summary"]["profiles"].as_array().unwrap().len(), 10);

    let (status, value) = call(Request::builder().uri("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], json!("ok"));
}
