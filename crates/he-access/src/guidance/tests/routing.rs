use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::guidance::router::{assess_handler, guidance_router};

#[tokio::test]
async fn assess_handler_returns_report_for_valid_request() {
    let service = Arc::new(guidance_service());

    let response = assess_handler(State(service), axum::Json(request())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("qualification_level").and_then(|v| v.as_u64()),
        Some(6)
    );
    assert_eq!(
        payload
            .get("confidence")
            .and_then(|v| v.as_str()),
        Some("high")
    );
    assert!(payload
        .get("pathways")
        .and_then(|v| v.as_array())
        .is_some_and(|pathways| pathways.len() == 2));
}

#[tokio::test]
async fn assess_handler_rejects_intake_violations() {
    let service = Arc::new(guidance_service());
    let mut request = request();
    request.age = 14;

    let response = assess_handler(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(|v| v.as_str())
        .is_some_and(|message| message.contains("age")));
}

#[tokio::test]
async fn assessments_route_accepts_json_payloads() {
    let router = guidance_router(Arc::new(guidance_service()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/guidance/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&request()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("checklist").is_some());
    assert!(payload.get("funding").is_some());
}

#[tokio::test]
async fn assessments_route_rejects_unknown_enum_labels() {
    let router = guidance_router(Arc::new(guidance_service()));

    let body = json!({
        "highest_qualification": "polytechnic",
        "years_since_study": 3,
        "country_of_study": "Syria",
        "age": 25,
        "english_level": "intermediate",
        "residence_status": "refugee",
        "study_mode": "full_time",
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/guidance/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert!(
        response.status().is_client_error(),
        "unknown label must be rejected, got {}",
        response.status()
    );
}

#[tokio::test]
async fn options_route_publishes_the_form_vocabularies() {
    let router = guidance_router(Arc::new(guidance_service()));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/guidance/options")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let qualifications = payload
        .get("qualifications")
        .and_then(|v| v.as_array())
        .expect("qualifications array");
    assert_eq!(qualifications.len(), 10);
    assert!(qualifications.iter().any(|entry| {
        entry.get("value").and_then(|v| v.as_str()) == Some("bachelors_degree")
            && entry.get("label").and_then(|v| v.as_str())
                == Some("Bachelor's Degree (3-4 years)")
    }));
    assert_eq!(
        payload
            .get("english_levels")
            .and_then(|v| v.as_array())
            .map(|levels| levels.len()),
        Some(5)
    );
}
