use resume_screener::core::report::render_report;
use resume_screener::core::scoring::calculate_match_score;
use resume_screener::{CandidateProfile, EducationLevel, JobRequirements};

const GOLDEN: &str = "\
HEAVY
CANDIDATE ANALYSIS REPORT
Position: Senior Python Developer
HEAVY

CANDIDATE INFORMATION
LIGHT
Name:           John Doe
Email:          john.doe@email.com
Phone:          +1-555-123-4567

MATCH SCORE: 88/100
RECOMMENDATION: HIGHLY RECOMMENDED - Excellent match for the position

DETAILED BREAKDOWN
LIGHT
Skills Match:       38/50 points (75% of required skills, 3 of 4 matched)
Experience Match:   30/30 points (7 years >= 5 years required)
Education Match:    20/20 points (Bachelor found, Bachelor required)

SKILLS ANALYSIS
LIGHT
Candidate Skills: Docker, Git, Python, SQL
Matched Skills:   Python, SQL, Git
Missing Skills:   Django

EXPERIENCE
LIGHT
Total Years: 7 years
Required:    5 years

EDUCATION
LIGHT
Highest Level: Bachelor
Required:      Bachelor

HEAVY
END OF REPORT
HEAVY
";

fn expected_report() -> String {
    GOLDEN
        .replace("HEAVY", &"=".repeat(80))
        .replace("LIGHT", &"-".repeat(80))
}

#[test]
fn test_report_matches_golden_output() {
    let profile = CandidateProfile {
        name: "John Doe".to_string(),
        email: "john.doe@email.com".to_string(),
        phone: "+1-555-123-4567".to_string(),
        skills: ["Python", "SQL", "Git", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        experience_years: 7,
        education_level: Some(EducationLevel::Bachelor),
        raw_text: String::new(),
    };
    let requirements = JobRequirements::new(
        "Senior Python Developer",
        ["Python", "Django", "SQL", "Git"],
        5,
        Some(EducationLevel::Bachelor),
    );

    let result = calculate_match_score(&profile, &requirements);
    let report = render_report(&profile, &requirements, &result);

    assert_eq!(report, expected_report());
}
