use serde::{Deserialize, Serialize};

use super::super::domain::EnglishLevel;

/// One recommended UK education route, constructed fresh per assessment from
/// the fixed templates below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayRecommendation {
    pub name: String,
    pub duration: String,
    pub description: String,
    pub next_steps: String,
}

fn pathway(
    name: &str,
    duration: &str,
    description: &str,
    next_steps: &str,
) -> PathwayRecommendation {
    PathwayRecommendation {
        name: name.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        next_steps: next_steps.to_string(),
    }
}

/// Build the ordered pathway list for a level/English tier.
///
/// The band predicates are independent and overlapping on purpose: boundary
/// levels (0, 1, 2) collect records from every band they satisfy, so this
/// must stay a sequence of separate checks rather than one exclusive
/// dispatch. `age` is part of the contract but does not branch yet.
pub fn recommend_pathways(
    level: u8,
    _age: u8,
    english_level: EnglishLevel,
) -> Vec<PathwayRecommendation> {
    let mut pathways = Vec::new();

    if level <= 1 {
        pathways.push(pathway(
            "English for Speakers of Other Languages (ESOL)",
            "Varies (3-12 months)",
            "Essential first step to improve English language skills",
            "After completing ESOL, consider Skills Bootcamps or Access to HE",
        ));
        pathways.push(pathway(
            "Functional Skills (English & Maths)",
            "3-6 months",
            "Build fundamental skills needed for further study",
            "Progress to Level 2 qualifications or Access to HE",
        ));
    }

    if level <= 2 {
        pathways.push(pathway(
            "Access to Higher Education Diploma",
            "1 year (full-time) or 2 years (part-time)",
            "Specifically designed for adults returning to education. No formal qualifications required.",
            "Direct entry to undergraduate degree programmes",
        ));
        pathways.push(pathway(
            "Skills Bootcamps",
            "12-16 weeks",
            "Free, flexible training in digital, technical and green skills",
            "Employment or further study",
        ));
    }

    if level == 3 {
        pathways.push(pathway(
            "Foundation Year (Year 0) + Undergraduate Degree",
            "4 years total",
            "Foundation year prepares you for degree-level study",
            "Progress to full undergraduate degree",
        ));
        pathways.push(pathway(
            "Direct Entry to Undergraduate Degree",
            "3-4 years",
            "Apply directly to university with A-Level equivalent qualifications",
            "Complete bachelor's degree, then employment or postgraduate study",
        ));
    }

    if level >= 6 {
        pathways.push(pathway(
            "Postgraduate Taught Masters",
            "1 year (full-time) or 2 years (part-time)",
            "Advanced study with existing bachelor's degree",
            "Professional career or PhD study",
        ));
        pathways.push(pathway(
            "Postgraduate Research (PhD)",
            "3-4 years",
            "Original research leading to doctoral qualification",
            "Academic or research career",
        ));
    }

    // Beginner English takes priority over everything band-derived.
    if english_level == EnglishLevel::Beginner {
        pathways.insert(
            0,
            pathway(
                "ESOL - Priority Recommendation",
                "6-12 months",
                "Focus on English language acquisition before other studies",
                "Re-assess education pathways after achieving B1/B2 English level",
            ),
        );
    }

    pathways
}
