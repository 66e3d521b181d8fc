use resume_screener::core::ranking::{rank_records, summarize};
use resume_screener::{
    EducationLevel, JobRequirements, LocalStorage, RecommendationTier, ResumeScreener,
    ScreenerConfig, ScreenerError, Vocabulary,
};
use std::io::Read;
use tempfile::TempDir;

const SENIOR_PYTHON: &str = r#"
John Doe
john.doe@email.com | +1-555-123-4567

PROFESSIONAL SUMMARY
Senior Software Engineer with 7 years of experience in Python development

SKILLS
Python, Django, SQL, Git, REST API, Docker, AWS

EDUCATION
Bachelor of Science in Computer Science
"#;

const FRONTEND: &str = r#"
Jane Smith
jane.smith@email.com
(555) 987-6543

Frontend developer with 2 years of experience.
Skills: JavaScript, React, HTML, CSS

Bachelor of Arts in Design
"#;

const CONFIG: &str = r#"
[job]
position = "Senior Python Developer"
required_skills = ["Python", "Django", "SQL", "Git"]
required_experience = 5
required_education = "Bachelor"

[output]
results_file = "results.json"
bundle = "bundle.zip"
"#;

fn requirements() -> JobRequirements {
    JobRequirements::new(
        "Senior Python Developer",
        ["Python", "Django", "SQL", "Git"],
        5,
        Some(EducationLevel::Bachelor),
    )
}

#[test]
fn test_end_to_end_screening() {
    let temp_dir = TempDir::new().unwrap();
    let screener = ResumeScreener::new(
        requirements(),
        Vocabulary::standard(),
        LocalStorage::new(temp_dir.path()),
    );

    let analyses = screener.analyze_batch(&[SENIOR_PYTHON, FRONTEND]);

    let strong = &analyses[0];
    assert_eq!(strong.profile.name, "John Doe");
    assert_eq!(strong.profile.phone, "+1-555-123-4567");
    assert_eq!(strong.profile.experience_years, 7);
    assert_eq!(strong.result.breakdown.skills_score, 50);
    assert_eq!(strong.result.breakdown.experience_score, 30);
    assert_eq!(strong.result.breakdown.education_score, 20);
    assert_eq!(strong.result.tier, RecommendationTier::HighlyRecommended);

    let weak = &analyses[1];
    assert_eq!(weak.profile.name, "Jane Smith");
    assert_eq!(weak.profile.phone, "(555) 987-6543");
    assert_eq!(weak.profile.education_level, Some(EducationLevel::Bachelor));
    assert_eq!(weak.result.breakdown.skills_score, 0);
    assert_eq!(weak.result.breakdown.experience_score, 12);
    assert_eq!(weak.result.breakdown.education_score, 20);
    assert_eq!(weak.result.breakdown.total_score, 32);
    assert_eq!(weak.result.tier, RecommendationTier::NotRecommended);
    assert_eq!(weak.result.missing_skills, ["Python", "Django", "SQL", "Git"]);
}

#[test]
fn test_results_survive_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let screener = ResumeScreener::new(
        requirements(),
        Vocabulary::standard(),
        LocalStorage::new(temp_dir.path()),
    );
    let analyses = screener.analyze_batch(&[FRONTEND, SENIOR_PYTHON]);

    screener.save_results("batch/results.json", &analyses).unwrap();
    assert!(temp_dir.path().join("batch/results.json").exists());

    let loaded = screener.load_results("batch/results.json").unwrap();
    assert_eq!(loaded.len(), 2);
    for (record, analysis) in loaded.iter().zip(&analyses) {
        assert_eq!(record.profile().skills, analysis.profile.skills);
        assert_eq!(record.breakdown(), analysis.result.breakdown);
        assert_eq!(record.recommendation, analysis.result.tier);
    }

    let ranking = rank_records(&loaded);
    assert_eq!(ranking[0].name, "John Doe");
    assert_eq!(ranking[1].name, "Jane Smith");

    let summary = summarize(&loaded);
    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.recommended, 1);
    assert!((summary.average_score - 66.0).abs() < f64::EPSILON);
}

#[test]
fn test_corrupt_results_file_fails_whole_load() {
    let temp_dir = TempDir::new().unwrap();
    let screener = ResumeScreener::new(
        requirements(),
        Vocabulary::standard(),
        LocalStorage::new(temp_dir.path()),
    );
    let analyses = screener.analyze_batch(&[SENIOR_PYTHON, FRONTEND]);
    screener.save_results("results.json", &analyses).unwrap();

    let path = temp_dir.path().join("results.json");
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, content.replacen("\"total_score\": 32", "\"total_score\": \"32\"", 1))
        .unwrap();

    assert!(matches!(
        screener.load_results("results.json"),
        Err(ScreenerError::ParseError { record: Some(1), .. })
    ));
    assert!(matches!(
        screener.load_results("missing.json"),
        Err(ScreenerError::IoError(_))
    ));
}

#[test]
fn test_config_driven_run_writes_reports_and_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScreenerConfig::from_toml_str(CONFIG).unwrap();
    let vocabulary = config.vocabulary().unwrap();
    let screener = ResumeScreener::new(
        config.job.clone(),
        &vocabulary,
        LocalStorage::new(temp_dir.path()),
    );

    let analyses = screener.analyze_batch(&[SENIOR_PYTHON, FRONTEND]);
    screener
        .save_results(&config.output.results_file, &analyses)
        .unwrap();
    let reports = screener.write_reports(&analyses).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(temp_dir.path().join("reports/report_John_Doe_1.txt").exists());
    assert!(temp_dir.path().join("reports/report_Jane_Smith_2.txt").exists());

    let bundle = config.output.bundle.as_deref().unwrap();
    screener.export_bundle(bundle, &analyses).unwrap();

    let file = std::fs::File::open(temp_dir.path().join("bundle.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.len(), 4);

    let mut results = String::new();
    archive
        .by_name("results.json")
        .unwrap()
        .read_to_string(&mut results)
        .unwrap();
    let saved = std::fs::read_to_string(temp_dir.path().join("results.json")).unwrap();
    assert_eq!(results, saved);
}

#[test]
fn test_invalid_requirements_stop_before_scoring() {
    let err = JobRequirements::from_value(&serde_json::json!({
        "position": "Dev",
        "required_skills": "Python",
        "required_experience": 5,
        "required_education": "Bachelor"
    }))
    .unwrap_err();

    assert!(matches!(err, ScreenerError::ValidationError { .. }));
}
