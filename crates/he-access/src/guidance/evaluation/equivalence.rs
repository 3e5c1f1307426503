use serde::{Deserialize, Serialize};

/// Approximate National Qualifications Framework banding for a resolved
/// level. Orientation only, never an official determination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UkEquivalence {
    pub label: String,
    pub description: String,
}

/// Total over every `u8`: exact bands for 0-3, a degree-level catch-all for
/// anything >= 6, and a generic secondary/college band for the rest.
pub fn uk_equivalent(level: u8) -> UkEquivalence {
    let (label, description) = match level {
        0 => ("Entry Level", "Limited formal education"),
        1 => ("UK Entry Level / Level 1", "Primary education equivalent"),
        2 => ("UK Level 1-2 (GCSE equivalent)", "Lower secondary education"),
        3 => ("UK Level 3 (A-Level equivalent)", "Upper secondary/college level"),
        level if level >= 6 => ("UK Level 6+ (Degree level)", "Higher education qualification"),
        _ => ("UK Level 2-3", "Secondary/college level"),
    };

    UkEquivalence {
        label: label.to_string(),
        description: description.to_string(),
    }
}
