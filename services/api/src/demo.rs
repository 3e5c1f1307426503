use clap::Args;
use he_access::config::AppConfig;
use he_access::error::AppError;
use he_access::guidance::{
    AssessmentRequest, EnglishLevel, FormOption, GuidanceReport, GuidanceService,
    QualificationAttainment, ResidenceStatus, StudyMode, SubjectArea,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Highest qualification key (e.g. bachelors_degree; see the options endpoint)
    #[arg(long, value_parser = crate::infra::parse_qualification)]
    qualification: QualificationAttainment,
    /// Years since the qualification was completed
    #[arg(long, default_value_t = 5)]
    years_since_study: u8,
    /// Country where the education was completed (leave empty if unsure)
    #[arg(long, default_value = "")]
    country: String,
    /// Applicant age
    #[arg(long, default_value_t = 25)]
    age: u8,
    /// Self-assessed English level key
    #[arg(long, value_parser = crate::infra::parse_english_level, default_value = "intermediate")]
    english_level: EnglishLevel,
    /// Immigration/residence status key
    #[arg(long, value_parser = crate::infra::parse_residence_status, default_value = "other")]
    residence_status: ResidenceStatus,
    /// Subject area of interest (repeatable)
    #[arg(long = "subject", value_parser = crate::infra::parse_subject_area)]
    subjects: Vec<SubjectArea>,
    /// Preferred study mode key
    #[arg(long, value_parser = crate::infra::parse_study_mode, default_value = "full_time")]
    study_mode: StudyMode,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the demo report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = GuidanceService::new(config.guidance);

    let request = AssessmentRequest {
        highest_qualification: args.qualification,
        years_since_study: args.years_since_study,
        country_of_study: args.country,
        age: args.age,
        english_level: args.english_level,
        residence_status: args.residence_status,
        subject_interests: args.subjects,
        study_mode: args.study_mode,
    };

    let report = service.assess(request)?;
    render_report(&report, args.json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = GuidanceService::new(config.guidance);

    let request = demo_request();
    println!("HE Access Assistant demo");
    println!(
        "Profile: {} | {} years since study | {} | age {}",
        request.highest_qualification.label(),
        request.years_since_study,
        request.country_of_study,
        request.age
    );
    println!(
        "English: {} | Status: {}",
        request.english_level.label(),
        request.residence_status.label()
    );
    println!();

    let report = service.assess(request)?;
    render_report(&report, args.json);
    Ok(())
}

pub(crate) fn demo_request() -> AssessmentRequest {
    AssessmentRequest {
        highest_qualification: QualificationAttainment::UpperSecondary,
        years_since_study: 4,
        country_of_study: "Afghanistan".to_string(),
        age: 27,
        english_level: EnglishLevel::Intermediate,
        residence_status: ResidenceStatus::Refugee,
        subject_interests: vec![SubjectArea::Engineering, SubjectArea::Sciences],
        study_mode: StudyMode::FullTime,
    }
}

fn render_report(report: &GuidanceReport, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("report unavailable: {err}"),
        }
        return;
    }

    println!("Qualification assessment");
    println!(
        "- Level {} ({})",
        report.qualification_level, report.qualification_label
    );
    println!(
        "- UK equivalent: {} | {}",
        report.uk_equivalent.label, report.uk_equivalent.description
    );
    println!("- Mapping confidence: {}", report.confidence.label());
    println!("  For official recognition, obtain a UK ENIC Statement of Comparability.");

    if report.pathways.is_empty() {
        println!("\nRecommended pathways: none matched this level");
    } else {
        println!("\nRecommended pathways");
        for (index, pathway) in report.pathways.iter().enumerate() {
            println!("{}. {} ({})", index + 1, pathway.name, pathway.duration);
            println!("   {}", pathway.description);
            println!("   Next steps: {}", pathway.next_steps);
        }
    }

    println!("\nNext steps checklist");
    for item in &report.checklist {
        println!("- {item}");
    }

    println!("\nFunding & financial support");
    println!("{}", report.funding.summary);
    for option in &report.funding.options {
        println!("- {option}");
    }

    println!("\nEssential resources");
    println!("Verification services:");
    for link in &report.resources.verification {
        println!("- {} <{}> ({})", link.name, link.url, link.focus);
    }
    println!("Support organizations:");
    for link in &report.resources.support {
        println!("- {} <{}> ({})", link.name, link.url, link.focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use he_access::guidance::GuidanceConfig;

    #[test]
    fn demo_request_passes_intake_and_yields_degree_entry_routes() {
        let service = GuidanceService::new(GuidanceConfig::default());
        let report = service.assess(demo_request()).expect("demo request valid");
        assert_eq!(report.qualification_level, 3);
        assert_eq!(report.pathways.len(), 2);
    }
}
