use axum::response::Response;
use serde_json::Value;

use crate::guidance::domain::{
    ApplicantProfile, AssessmentRequest, EnglishLevel, QualificationAttainment, ResidenceStatus,
    StudyMode, SubjectArea,
};
use crate::guidance::evaluation::{GuidanceConfig, GuidanceEngine};
use crate::guidance::intake::IntakeGuard;
use crate::guidance::service::GuidanceService;

pub(super) fn request() -> AssessmentRequest {
    AssessmentRequest {
        highest_qualification: QualificationAttainment::BachelorsDegree,
        years_since_study: 3,
        country_of_study: "Syria".to_string(),
        age: 25,
        english_level: EnglishLevel::Intermediate,
        residence_status: ResidenceStatus::Refugee,
        subject_interests: vec![SubjectArea::ComputingAndTechnology],
        study_mode: StudyMode::FullTime,
    }
}

pub(super) fn request_for(
    qualification: QualificationAttainment,
    english_level: EnglishLevel,
) -> AssessmentRequest {
    AssessmentRequest {
        highest_qualification: qualification,
        english_level,
        ..request()
    }
}

pub(super) fn profile_for(
    qualification: QualificationAttainment,
    english_level: EnglishLevel,
) -> ApplicantProfile {
    guard()
        .profile_from_request(request_for(qualification, english_level))
        .expect("fixture request passes intake")
}

pub(super) fn guidance_config() -> GuidanceConfig {
    GuidanceConfig::default()
}

pub(super) fn engine() -> GuidanceEngine {
    GuidanceEngine::new(guidance_config())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn guidance_service() -> GuidanceService {
    GuidanceService::new(guidance_config())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
