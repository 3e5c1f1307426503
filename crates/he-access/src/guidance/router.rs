use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{
    AssessmentRequest, EnglishLevel, FormOption, QualificationAttainment, ResidenceStatus,
    StudyMode, SubjectArea,
};
use super::service::{GuidanceService, GuidanceServiceError};

/// Router builder exposing the guidance HTTP surface.
pub fn guidance_router(service: Arc<GuidanceService>) -> Router {
    Router::new()
        .route("/api/v1/guidance/assessments", post(assess_handler))
        .route("/api/v1/guidance/options", get(options_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<GuidanceService>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    match service.assess(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(GuidanceServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// One selectable entry for presentation layers rendering the intake form.
#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

fn options_of<T: FormOption>() -> Vec<OptionEntry> {
    T::ALL
        .iter()
        .map(|&option| OptionEntry {
            value: option.key(),
            label: option.label(),
        })
        .collect()
}

pub(crate) async fn options_handler() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "qualifications": options_of::<QualificationAttainment>(),
        "english_levels": options_of::<EnglishLevel>(),
        "residence_statuses": options_of::<ResidenceStatus>(),
        "subject_areas": options_of::<SubjectArea>(),
        "study_modes": options_of::<StudyMode>(),
    }))
}
