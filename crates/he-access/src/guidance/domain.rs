use serde::{Deserialize, Serialize};

/// Shared behavior for the closed option vocabularies collected by the intake
/// form, so the HTTP options endpoint and the CLI parse from one source.
pub trait FormOption: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// Stable wire name; must match the serde rename for the variant.
    fn key(self) -> &'static str;

    /// Human-readable text shown by presentation layers.
    fn label(self) -> &'static str;

    fn from_key(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.key() == raw.trim())
    }
}

/// Self-reported highest attainment. The fixed level mapping is the
/// qualification table; everything downstream keys off `level()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationAttainment {
    NoFormalQualifications,
    PrimarySchool,
    LowerSecondary,
    UpperSecondary,
    VocationalDiploma,
    PreUniversity,
    FoundationCourse,
    BachelorsDegree,
    MastersDegree,
    DoctoralDegree,
}

impl QualificationAttainment {
    /// Ordinal attainment level in [0, 8], coarser than any national grading.
    pub const fn level(self) -> u8 {
        match self {
            QualificationAttainment::NoFormalQualifications => 0,
            QualificationAttainment::PrimarySchool => 1,
            QualificationAttainment::LowerSecondary => 2,
            QualificationAttainment::UpperSecondary
            | QualificationAttainment::VocationalDiploma
            | QualificationAttainment::PreUniversity
            | QualificationAttainment::FoundationCourse => 3,
            QualificationAttainment::BachelorsDegree => 6,
            QualificationAttainment::MastersDegree => 7,
            QualificationAttainment::DoctoralDegree => 8,
        }
    }
}

impl FormOption for QualificationAttainment {
    const ALL: &'static [Self] = &[
        QualificationAttainment::NoFormalQualifications,
        QualificationAttainment::PrimarySchool,
        QualificationAttainment::LowerSecondary,
        QualificationAttainment::UpperSecondary,
        QualificationAttainment::VocationalDiploma,
        QualificationAttainment::PreUniversity,
        QualificationAttainment::FoundationCourse,
        QualificationAttainment::BachelorsDegree,
        QualificationAttainment::MastersDegree,
        QualificationAttainment::DoctoralDegree,
    ];

    fn key(self) -> &'static str {
        match self {
            QualificationAttainment::NoFormalQualifications => "no_formal_qualifications",
            QualificationAttainment::PrimarySchool => "primary_school",
            QualificationAttainment::LowerSecondary => "lower_secondary",
            QualificationAttainment::UpperSecondary => "upper_secondary",
            QualificationAttainment::VocationalDiploma => "vocational_diploma",
            QualificationAttainment::PreUniversity => "pre_university",
            QualificationAttainment::FoundationCourse => "foundation_course",
            QualificationAttainment::BachelorsDegree => "bachelors_degree",
            QualificationAttainment::MastersDegree => "masters_degree",
            QualificationAttainment::DoctoralDegree => "doctoral_degree",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QualificationAttainment::NoFormalQualifications => "No formal qualifications",
            QualificationAttainment::PrimarySchool => "Primary School (up to age 11-12)",
            QualificationAttainment::LowerSecondary => "Lower Secondary School (ages 12-15)",
            QualificationAttainment::UpperSecondary => {
                "Upper Secondary School/High School Certificate"
            }
            QualificationAttainment::VocationalDiploma => "Technical/Vocational Diploma",
            QualificationAttainment::PreUniversity => {
                "Higher Secondary/Pre-University (A-Level equivalent)"
            }
            QualificationAttainment::FoundationCourse => "Foundation/Access Course",
            QualificationAttainment::BachelorsDegree => "Bachelor's Degree (3-4 years)",
            QualificationAttainment::MastersDegree => "Master's Degree",
            QualificationAttainment::DoctoralDegree => "Doctoral Degree (PhD)",
        }
    }
}

/// Self-assessed English proficiency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishLevel {
    Beginner,
    Elementary,
    Intermediate,
    UpperIntermediate,
    Advanced,
}

impl FormOption for EnglishLevel {
    const ALL: &'static [Self] = &[
        EnglishLevel::Beginner,
        EnglishLevel::Elementary,
        EnglishLevel::Intermediate,
        EnglishLevel::UpperIntermediate,
        EnglishLevel::Advanced,
    ];

    fn key(self) -> &'static str {
        match self {
            EnglishLevel::Beginner => "beginner",
            EnglishLevel::Elementary => "elementary",
            EnglishLevel::Intermediate => "intermediate",
            EnglishLevel::UpperIntermediate => "upper_intermediate",
            EnglishLevel::Advanced => "advanced",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EnglishLevel::Beginner => "Beginner (learning basic words and phrases)",
            EnglishLevel::Elementary => "Elementary (can have simple conversations)",
            EnglishLevel::Intermediate => "Intermediate (can communicate in most situations)",
            EnglishLevel::UpperIntermediate => "Upper Intermediate (confident in most contexts)",
            EnglishLevel::Advanced => "Advanced (fluent, university-ready)",
        }
    }
}

/// Immigration/residence status; drives the funding guidance block only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidenceStatus {
    AsylumSeeker,
    Refugee,
    HumanitarianProtection,
    IndefiniteLeaveToRemain,
    Other,
}

impl FormOption for ResidenceStatus {
    const ALL: &'static [Self] = &[
        ResidenceStatus::AsylumSeeker,
        ResidenceStatus::Refugee,
        ResidenceStatus::HumanitarianProtection,
        ResidenceStatus::IndefiniteLeaveToRemain,
        ResidenceStatus::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            ResidenceStatus::AsylumSeeker => "asylum_seeker",
            ResidenceStatus::Refugee => "refugee",
            ResidenceStatus::HumanitarianProtection => "humanitarian_protection",
            ResidenceStatus::IndefiniteLeaveToRemain => "indefinite_leave_to_remain",
            ResidenceStatus::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ResidenceStatus::AsylumSeeker => "Asylum seeker (application pending)",
            ResidenceStatus::Refugee => "Refugee status granted",
            ResidenceStatus::HumanitarianProtection => "Humanitarian protection",
            ResidenceStatus::IndefiniteLeaveToRemain => "Indefinite Leave to Remain",
            ResidenceStatus::Other => "Other/Prefer not to say",
        }
    }
}

/// Declared subject interests; collected for presentation layers and future
/// pathway tailoring, not consulted by the current decision tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectArea {
    BusinessAndManagement,
    ComputingAndTechnology,
    Engineering,
    HealthAndSocialCare,
    Law,
    ArtsAndHumanities,
    Sciences,
    Education,
    Other,
}

impl FormOption for SubjectArea {
    const ALL: &'static [Self] = &[
        SubjectArea::BusinessAndManagement,
        SubjectArea::ComputingAndTechnology,
        SubjectArea::Engineering,
        SubjectArea::HealthAndSocialCare,
        SubjectArea::Law,
        SubjectArea::ArtsAndHumanities,
        SubjectArea::Sciences,
        SubjectArea::Education,
        SubjectArea::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            SubjectArea::BusinessAndManagement => "business_and_management",
            SubjectArea::ComputingAndTechnology => "computing_and_technology",
            SubjectArea::Engineering => "engineering",
            SubjectArea::HealthAndSocialCare => "health_and_social_care",
            SubjectArea::Law => "law",
            SubjectArea::ArtsAndHumanities => "arts_and_humanities",
            SubjectArea::Sciences => "sciences",
            SubjectArea::Education => "education",
            SubjectArea::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SubjectArea::BusinessAndManagement => "Business & Management",
            SubjectArea::ComputingAndTechnology => "Computing & Technology",
            SubjectArea::Engineering => "Engineering",
            SubjectArea::HealthAndSocialCare => "Health & Social Care",
            SubjectArea::Law => "Law",
            SubjectArea::ArtsAndHumanities => "Arts & Humanities",
            SubjectArea::Sciences => "Sciences",
            SubjectArea::Education => "Education",
            SubjectArea::Other => "Other",
        }
    }
}

/// Preferred study mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    FullTime,
    PartTime,
    Flexible,
}

impl FormOption for StudyMode {
    const ALL: &'static [Self] = &[StudyMode::FullTime, StudyMode::PartTime, StudyMode::Flexible];

    fn key(self) -> &'static str {
        match self {
            StudyMode::FullTime => "full_time",
            StudyMode::PartTime => "part_time",
            StudyMode::Flexible => "flexible",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StudyMode::FullTime => "Full-time",
            StudyMode::PartTime => "Part-time",
            StudyMode::Flexible => "Flexible/Distance learning",
        }
    }
}

/// Raw intake submission as collected by any presentation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub highest_qualification: QualificationAttainment,
    pub years_since_study: u8,
    pub country_of_study: String,
    pub age: u8,
    pub english_level: EnglishLevel,
    pub residence_status: ResidenceStatus,
    #[serde(default)]
    pub subject_interests: Vec<SubjectArea>,
    pub study_mode: StudyMode,
}

/// Sanitized profile produced by the intake guard. Request-scoped only: it is
/// computed, evaluated, and dropped; nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub qualification: QualificationAttainment,
    pub qualification_level: u8,
    pub age: u8,
    pub years_since_study: u8,
    pub country_of_study: String,
    pub english_level: EnglishLevel,
    pub residence_status: ResidenceStatus,
    pub subject_interests: Vec<SubjectArea>,
    pub study_mode: StudyMode,
}

/// How much weight to give the automated level mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Lower,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Lower => "Lower",
        }
    }
}
