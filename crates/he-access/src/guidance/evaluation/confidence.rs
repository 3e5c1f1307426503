use super::super::domain::ConfidenceLevel;
use super::config::GuidanceConfig;

/// Three-way classifier over study recency and country availability,
/// evaluated in order of decreasing confidence.
pub fn assess_confidence(
    years_since_study: u8,
    country_of_study: &str,
    config: &GuidanceConfig,
) -> ConfidenceLevel {
    if years_since_study <= config.recent_study_years && !country_of_study.trim().is_empty() {
        ConfidenceLevel::High
    } else if years_since_study <= config.dated_study_years {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Lower
    }
}
