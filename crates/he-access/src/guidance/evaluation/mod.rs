mod checklist;
mod config;
mod confidence;
mod equivalence;
mod funding;
mod pathways;

pub use checklist::build_checklist;
pub use config::GuidanceConfig;
pub use confidence::assess_confidence;
pub use equivalence::{uk_equivalent, UkEquivalence};
pub use funding::{
    funding_for, resource_directory, FundingGuidance, FundingTone, ResourceDirectory, ResourceLink,
};
pub use pathways::{recommend_pathways, PathwayRecommendation};

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, ConfidenceLevel, FormOption};

/// Stateless engine applying the fixed decision tables to a sanitized
/// profile. Deterministic for identical inputs: no clock, no randomness, no
/// shared mutable state.
pub struct GuidanceEngine {
    config: GuidanceConfig,
}

impl GuidanceEngine {
    pub fn new(config: GuidanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    /// Compute the full guidance report for one profile.
    pub fn assess(&self, profile: &ApplicantProfile) -> GuidanceReport {
        let level = profile.qualification_level;

        let pathways = recommend_pathways(level, profile.age, profile.english_level);
        let checklist = build_checklist(level, &pathways);

        GuidanceReport {
            qualification_level: level,
            qualification_label: profile.qualification.label().to_string(),
            uk_equivalent: uk_equivalent(level),
            confidence: assess_confidence(
                profile.years_since_study,
                &profile.country_of_study,
                &self.config,
            ),
            pathways,
            checklist,
            funding: funding_for(profile.residence_status),
            resources: resource_directory(),
        }
    }
}

/// Complete guidance payload for a single assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceReport {
    pub qualification_level: u8,
    pub qualification_label: String,
    pub uk_equivalent: UkEquivalence,
    pub confidence: ConfidenceLevel,
    pub pathways: Vec<PathwayRecommendation>,
    pub checklist: Vec<String>,
    pub funding: FundingGuidance,
    pub resources: ResourceDirectory,
}
