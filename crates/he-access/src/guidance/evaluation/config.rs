use serde::{Deserialize, Serialize};

/// Dials for the mapping-confidence heuristic. Loaded once at startup; the
/// engine treats them as read-only for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceConfig {
    /// Studies completed within this many years count as recent.
    pub recent_study_years: u8,
    /// Beyond `recent_study_years` but within this window the mapping is
    /// still usable, with reduced confidence.
    pub dated_study_years: u8,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            recent_study_years: 5,
            dated_study_years: 10,
        }
    }
}
