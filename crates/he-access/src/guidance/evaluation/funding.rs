use serde::{Deserialize, Serialize};

use super::super::domain::ResidenceStatus;

/// Tone marker so presentation layers can style the block (the positive
/// refugee-status message versus the neutral informational ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingTone {
    Positive,
    Informational,
}

/// Static funding text selected by residence status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingGuidance {
    pub tone: FundingTone,
    pub summary: String,
    pub options: Vec<String>,
}

fn guidance(tone: FundingTone, summary: &str, options: &[&str]) -> FundingGuidance {
    FundingGuidance {
        tone,
        summary: summary.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
    }
}

/// Select the funding block for a residence status. Granted refugee status
/// and pending asylum claims get dedicated text; every other status shares
/// the generic signposting block.
pub fn funding_for(status: ResidenceStatus) -> FundingGuidance {
    match status {
        ResidenceStatus::Refugee => guidance(
            FundingTone::Positive,
            "With refugee status, you may be eligible for:",
            &[
                "Home fee status (lower tuition fees)",
                "Student loans for tuition and living costs",
                "University refugee scholarships",
                "Council of Europe Development Bank loans",
            ],
        ),
        ResidenceStatus::AsylumSeeker => guidance(
            FundingTone::Informational,
            "As an asylum seeker, funding options may be limited, but you can:",
            &[
                "Apply for refugee-specific scholarships",
                "Look for hardship funds at universities",
                "Consider part-time study with part-time work",
                "Access free courses through local colleges",
            ],
        ),
        ResidenceStatus::HumanitarianProtection
        | ResidenceStatus::IndefiniteLeaveToRemain
        | ResidenceStatus::Other => guidance(
            FundingTone::Informational,
            "Funding eligibility depends on your specific immigration status. Contact:",
            &[
                "University student finance teams directly",
                "UKCISA (UK Council for International Student Affairs)",
                "Your support organization for detailed advice",
            ],
        ),
    }
}

/// External signposting link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
    pub focus: String,
}

fn link(name: &str, url: &str, focus: &str) -> ResourceLink {
    ResourceLink {
        name: name.to_string(),
        url: url.to_string(),
        focus: focus.to_string(),
    }
}

/// Essential resources attached to every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDirectory {
    pub verification: Vec<ResourceLink>,
    pub support: Vec<ResourceLink>,
}

pub fn resource_directory() -> ResourceDirectory {
    ResourceDirectory {
        verification: vec![
            link(
                "UK ENIC",
                "https://www.enic.org.uk/",
                "Qualification comparison service",
            ),
            link("UCAS", "https://www.ucas.com/", "University applications"),
            link(
                "GOV.UK Student Finance",
                "https://www.gov.uk/student-finance",
                "Funding information",
            ),
        ],
        support: vec![
            link(
                "Refugee Council",
                "https://www.refugeecouncil.org.uk/",
                "Education support",
            ),
            link(
                "STAR Network",
                "https://www.star-network.org.uk/",
                "Student refugee support",
            ),
            link(
                "Access HE",
                "https://www.accesstohe.ac.uk/",
                "Access courses directory",
            ),
        ],
    }
}
