use super::domain::{ApplicantProfile, AssessmentRequest};

/// Validation errors raised at the intake boundary. Core lookups are total,
/// so these cover only the numeric form constraints.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("age {found} outside supported range {min}-{max}")]
    AgeOutOfRange { min: u8, max: u8, found: u8 },
    #[error("years since study {found} exceeds maximum {max}")]
    StudyRecencyOutOfRange { max: u8, found: u8 },
}

const DEFAULT_MIN_AGE: u8 = 16;
const DEFAULT_MAX_AGE: u8 = 100;
const DEFAULT_MAX_YEARS_SINCE_STUDY: u8 = 30;

/// Bounds applied to the self-reported numeric fields.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    min_age: u8,
    max_age: u8,
    max_years_since_study: u8,
}

impl IntakePolicy {
    pub fn new(min_age: u8, max_age: u8, max_years_since_study: u8) -> Self {
        if min_age > max_age {
            return Self::default();
        }

        Self {
            min_age,
            max_age,
            max_years_since_study,
        }
    }

    pub fn min_age(&self) -> u8 {
        self.min_age
    }

    pub fn max_age(&self) -> u8 {
        self.max_age
    }

    pub fn max_years_since_study(&self) -> u8 {
        self.max_years_since_study
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            max_years_since_study: DEFAULT_MAX_YEARS_SINCE_STUDY,
        }
    }
}

/// Guard responsible for producing `ApplicantProfile` instances from raw
/// submissions. Enumeration mismatch never reaches here: the closed enums
/// reject unknown labels during deserialization rather than defaulting.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Validate a submission and derive the qualification level.
    pub fn profile_from_request(
        &self,
        request: AssessmentRequest,
    ) -> Result<ApplicantProfile, IntakeViolation> {
        if request.age < self.policy.min_age || request.age > self.policy.max_age {
            return Err(IntakeViolation::AgeOutOfRange {
                min: self.policy.min_age,
                max: self.policy.max_age,
                found: request.age,
            });
        }

        if request.years_since_study > self.policy.max_years_since_study {
            return Err(IntakeViolation::StudyRecencyOutOfRange {
                max: self.policy.max_years_since_study,
                found: request.years_since_study,
            });
        }

        let country_of_study = request.country_of_study.trim().to_string();

        Ok(ApplicantProfile {
            qualification: request.highest_qualification,
            qualification_level: request.highest_qualification.level(),
            age: request.age,
            years_since_study: request.years_since_study,
            country_of_study,
            english_level: request.english_level,
            residence_status: request.residence_status,
            subject_interests: request.subject_interests,
            study_mode: request.study_mode,
        })
    }
}
