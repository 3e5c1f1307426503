use super::pathways::PathwayRecommendation;

/// Build the ordered action checklist for a level.
///
/// Three universal openers, one level-conditional block (the <= 2 and >= 3
/// blocks partition the level domain, so exactly one fires), three universal
/// closers. Ordering is significant and must stay append-only. The pathway
/// list is accepted for contract symmetry but not consulted yet.
pub fn build_checklist(level: u8, _pathways: &[PathwayRecommendation]) -> Vec<String> {
    let mut checklist: Vec<String> = Vec::with_capacity(9);

    checklist.extend(
        [
            "📧 Register with local colleges offering ESOL and Access courses",
            "🌐 Create account on UCAS (Universities and Colleges Admissions Service) website",
            "📄 Get official UK ENIC Statement of Comparability for your qualifications",
        ]
        .map(str::to_string),
    );

    if level <= 2 {
        checklist.extend(
            [
                "📚 Enquire about Access to Higher Education Diplomas at local colleges",
                "💰 Check eligibility for Advanced Learner Loan (fee support)",
                "🤝 Contact refugee support organizations for education guidance",
            ]
            .map(str::to_string),
        );
    }

    if level >= 3 {
        checklist.extend(
            [
                "🎓 Research universities with refugee scholarship programmes",
                "💷 Investigate student finance options (fees may be covered after 3 years UK residency)",
                "📝 Prepare personal statement highlighting your experience and goals",
            ]
            .map(str::to_string),
        );
    }

    checklist.extend(
        [
            "🔍 Verify settlement status/immigration requirements with universities",
            "💼 Look for part-time work or volunteering to build UK experience",
            "🏛️ Contact university widening participation teams for additional support",
        ]
        .map(str::to_string),
    );

    checklist
}
