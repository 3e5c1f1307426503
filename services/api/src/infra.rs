use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use he_access::guidance::{
    EnglishLevel, FormOption, QualificationAttainment, ResidenceStatus, StudyMode, SubjectArea,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn parse_option<T: FormOption>(raw: &str, what: &str) -> Result<T, String> {
    T::from_key(raw).ok_or_else(|| {
        let accepted = T::ALL
            .iter()
            .map(|option| option.key())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown {what} '{raw}' (accepted: {accepted})")
    })
}

pub(crate) fn parse_qualification(raw: &str) -> Result<QualificationAttainment, String> {
    parse_option(raw, "qualification")
}

pub(crate) fn parse_english_level(raw: &str) -> Result<EnglishLevel, String> {
    parse_option(raw, "english level")
}

pub(crate) fn parse_residence_status(raw: &str) -> Result<ResidenceStatus, String> {
    parse_option(raw, "residence status")
}

pub(crate) fn parse_subject_area(raw: &str) -> Result<SubjectArea, String> {
    parse_option(raw, "subject area")
}

pub(crate) fn parse_study_mode(raw: &str) -> Result<StudyMode, String> {
    parse_option(raw, "study mode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!(
            parse_qualification("bachelors_degree"),
            Ok(QualificationAttainment::BachelorsDegree)
        );
        assert_eq!(
            parse_english_level("upper_intermediate"),
            Ok(EnglishLevel::UpperIntermediate)
        );
        assert_eq!(parse_study_mode("part_time"), Ok(StudyMode::PartTime));
    }

    #[test]
    fn rejects_unknown_keys_with_the_accepted_list() {
        let error = parse_residence_status("tourist").expect_err("unknown key");
        assert!(error.contains("unknown residence status 'tourist'"));
        assert!(error.contains("asylum_seeker"));
    }
}
