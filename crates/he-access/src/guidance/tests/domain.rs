use serde_json::json;

use crate::guidance::domain::{
    EnglishLevel, FormOption, QualificationAttainment, ResidenceStatus, StudyMode, SubjectArea,
};

fn assert_keys_match_serde<T>()
where
    T: FormOption + serde::Serialize + std::fmt::Debug,
{
    for &option in T::ALL {
        assert_eq!(
            serde_json::to_value(option).expect("serializes"),
            json!(option.key()),
            "wire name drifted for {option:?}"
        );
        assert!(!option.label().is_empty());
    }
}

#[test]
fn option_keys_match_their_serde_names() {
    assert_keys_match_serde::<QualificationAttainment>();
    assert_keys_match_serde::<EnglishLevel>();
    assert_keys_match_serde::<ResidenceStatus>();
    assert_keys_match_serde::<SubjectArea>();
    assert_keys_match_serde::<StudyMode>();
}

#[test]
fn from_key_inverts_key() {
    for &qualification in QualificationAttainment::ALL {
        assert_eq!(
            QualificationAttainment::from_key(qualification.key()),
            Some(qualification)
        );
    }
    assert_eq!(QualificationAttainment::from_key("night_school"), None);
    assert_eq!(
        EnglishLevel::from_key(" beginner "),
        Some(EnglishLevel::Beginner)
    );
}

#[test]
fn qualification_table_matches_published_levels() {
    let expected = [
        (QualificationAttainment::NoFormalQualifications, 0),
        (QualificationAttainment::PrimarySchool, 1),
        (QualificationAttainment::LowerSecondary, 2),
        (QualificationAttainment::UpperSecondary, 3),
        (QualificationAttainment::VocationalDiploma, 3),
        (QualificationAttainment::PreUniversity, 3),
        (QualificationAttainment::FoundationCourse, 3),
        (QualificationAttainment::BachelorsDegree, 6),
        (QualificationAttainment::MastersDegree, 7),
        (QualificationAttainment::DoctoralDegree, 8),
    ];

    assert_eq!(QualificationAttainment::ALL.len(), expected.len());
    for (qualification, level) in expected {
        assert_eq!(qualification.level(), level, "{qualification:?}");
    }
}

#[test]
fn unknown_labels_fail_deserialization() {
    let result: Result<QualificationAttainment, _> = serde_json::from_value(json!("polytechnic"));
    assert!(result.is_err(), "unknown label must not default silently");
}
