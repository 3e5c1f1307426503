use super::domain::AssessmentRequest;
use super::evaluation::{GuidanceConfig, GuidanceEngine, GuidanceReport};
use super::intake::{IntakeGuard, IntakeViolation};

/// Facade composing the intake guard and the guidance engine.
///
/// Nothing is stored behind this: every assessment is computed from the
/// request alone and dropped once the response is produced, so the service
/// needs no locking and can be shared freely across request handlers.
pub struct GuidanceService {
    guard: IntakeGuard,
    engine: GuidanceEngine,
}

impl GuidanceService {
    pub fn new(config: GuidanceConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), config)
    }

    pub fn with_guard(guard: IntakeGuard, config: GuidanceConfig) -> Self {
        Self {
            guard,
            engine: GuidanceEngine::new(config),
        }
    }

    /// Validate a raw submission and compute the full guidance report.
    pub fn assess(&self, request: AssessmentRequest) -> Result<GuidanceReport, GuidanceServiceError> {
        let profile = self.guard.profile_from_request(request)?;
        Ok(self.engine.assess(&profile))
    }
}

/// Error raised by the guidance service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}
