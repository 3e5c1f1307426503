//! Assessment intake, the pathway decision tables, and the HTTP surface for
//! guidance requests.
//!
//! Everything here is a pure transform over one submission: intake validates
//! the numeric bounds, the engine walks the fixed tables, and the router maps
//! the result onto JSON. No state survives a request.

pub mod domain;
mod evaluation;
mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, AssessmentRequest, ConfidenceLevel, EnglishLevel, FormOption,
    QualificationAttainment, ResidenceStatus, StudyMode, SubjectArea,
};
pub use evaluation::{
    assess_confidence, build_checklist, funding_for, recommend_pathways, resource_directory,
    uk_equivalent, FundingGuidance, FundingTone, GuidanceConfig, GuidanceEngine, GuidanceReport,
    PathwayRecommendation, ResourceDirectory, ResourceLink, UkEquivalence,
};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use router::guidance_router;
pub use service::{GuidanceService, GuidanceServiceError};
