//! End-to-end scenarios for the guidance workflow, driven through the public
//! service facade and HTTP router only.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use he_access::guidance::{
    guidance_router, AssessmentRequest, ConfidenceLevel, EnglishLevel, GuidanceConfig,
    GuidanceService, QualificationAttainment, ResidenceStatus, StudyMode, SubjectArea,
};

fn submission() -> AssessmentRequest {
    AssessmentRequest {
        highest_qualification: QualificationAttainment::NoFormalQualifications,
        years_since_study: 4,
        country_of_study: "Sudan".to_string(),
        age: 31,
        english_level: EnglishLevel::Beginner,
        residence_status: ResidenceStatus::AsylumSeeker,
        subject_interests: vec![SubjectArea::HealthAndSocialCare],
        study_mode: StudyMode::PartTime,
    }
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[test]
fn facade_layers_bands_for_the_lowest_levels() {
    let service = GuidanceService::new(GuidanceConfig::default());

    let report = service.assess(submission()).expect("valid submission");

    assert_eq!(report.qualification_level, 0);
    assert_eq!(report.confidence, ConfidenceLevel::High);
    // Beginner English: priority ESOL first, then the two overlapping bands.
    assert_eq!(report.pathways.len(), 5);
    assert_eq!(report.pathways[0].name, "ESOL - Priority Recommendation");
    assert_eq!(report.checklist.len(), 9);
    assert!(report
        .funding
        .summary
        .contains("asylum seeker"));
}

#[tokio::test]
async fn router_round_trips_an_assessment() {
    let router = guidance_router(Arc::new(GuidanceService::new(GuidanceConfig::default())));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/guidance/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    assert_eq!(payload.get("qualification_level"), Some(&json!(0)));
    assert_eq!(
        payload
            .get("uk_equivalent")
            .and_then(|equivalence| equivalence.get("label")),
        Some(&json!("Entry Level"))
    );
    let pathways = payload
        .get("pathways")
        .and_then(|v| v.as_array())
        .expect("pathways array");
    assert_eq!(pathways.len(), 5);
    assert!(payload
        .get("resources")
        .and_then(|resources| resources.get("verification"))
        .is_some());
}

#[tokio::test]
async fn router_rejects_submissions_outside_the_form_bounds() {
    let router = guidance_router(Arc::new(GuidanceService::new(GuidanceConfig::default())));

    let mut underage = submission();
    underage.age = 12;

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/guidance/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&underage).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload.get("error").is_some());
}
