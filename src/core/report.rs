//! 純文字候選人報告。輸出只取決於輸入 (不含時間、語系)，
//! 可與 golden file 逐字比對。

use crate::core::scoring::skills_match_percent;
use crate::domain::model::{
    education_display, CandidateProfile, JobRequirements, MatchResult, ScoreBreakdown,
};

const RULE_WIDTH: usize = 80;
const NOT_FOUND: &str = "Not found";
const NONE_LISTED: &str = "None";

pub fn render_report(
    profile: &CandidateProfile,
    requirements: &JobRequirements,
    result: &MatchResult,
) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let breakdown = &result.breakdown;
    let candidate_skills: Vec<&str> = profile.skills.iter().map(String::as_str).collect();

    let lines = vec![
        heavy.clone(),
        "CANDIDATE ANALYSIS REPORT".to_string(),
        format!("Position: {}", requirements.position()),
        heavy.clone(),
        String::new(),
        "CANDIDATE INFORMATION".to_string(),
        light.clone(),
        format!("Name:           {}", profile.name),
        format!("Email:          {}", or_not_found(&profile.email)),
        format!("Phone:          {}", or_not_found(&profile.phone)),
        String::new(),
        format!("MATCH SCORE: {}/100", breakdown.total_score),
        format!("RECOMMENDATION: {}", result.tier),
        String::new(),
        "DETAILED BREAKDOWN".to_string(),
        light.clone(),
        format!(
            "Skills Match:       {}/{} points ({})",
            breakdown.skills_score,
            ScoreBreakdown::SKILLS_MAX,
            skills_clause(requirements, result)
        ),
        format!(
            "Experience Match:   {}/{} points ({})",
            breakdown.experience_score,
            ScoreBreakdown::EXPERIENCE_MAX,
            experience_clause(profile, requirements)
        ),
        format!(
            "Education Match:    {}/{} points ({})",
            breakdown.education_score,
            ScoreBreakdown::EDUCATION_MAX,
            education_clause(profile, requirements)
        ),
        String::new(),
        "SKILLS ANALYSIS".to_string(),
        light.clone(),
        format!("Candidate Skills: {}", join_or_none(&candidate_skills)),
        format!("Matched Skills:   {}", join_or_none(&result.matched_skills)),
        format!("Missing Skills:   {}", join_or_none(&result.missing_skills)),
        String::new(),
        "EXPERIENCE".to_string(),
        light.clone(),
        format!("Total Years: {} years", profile.experience_years),
        format!("Required:    {} years", requirements.required_experience()),
        String::new(),
        "EDUCATION".to_string(),
        light,
        format!("Highest Level: {}", education_display(profile.education_level)),
        format!(
            "Required:      {}",
            education_display(requirements.required_education())
        ),
        String::new(),
        heavy.clone(),
        "END OF REPORT".to_string(),
        heavy,
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn skills_clause(requirements: &JobRequirements, result: &MatchResult) -> String {
    let required = requirements.required_skills().len();
    if required == 0 {
        return "no skills required".to_string();
    }
    format!(
        "{}% of required skills, {} of {} matched",
        skills_match_percent(result.matched_skills.len(), required),
        result.matched_skills.len(),
        required
    )
}

fn experience_clause(profile: &CandidateProfile, requirements: &JobRequirements) -> String {
    let required = requirements.required_experience();
    if required == 0 {
        return "no minimum required".to_string();
    }
    let comparison = if profile.experience_years >= required {
        ">="
    } else {
        "<"
    };
    format!(
        "{} years {} {} years required",
        profile.experience_years, comparison, required
    )
}

fn education_clause(profile: &CandidateProfile, requirements: &JobRequirements) -> String {
    match (profile.education_level, requirements.required_education()) {
        (_, None) => "no minimum required".to_string(),
        (None, Some(need)) => format!("no degree found, {} required", need),
        (Some(have), Some(need)) if have >= need => format!("{} found, {} required", have, need),
        (Some(have), Some(need)) => format!("{} found, below {} required", have, need),
    }
}

fn or_not_found(value: &str) -> &str {
    if value.is_empty() {
        NOT_FOUND
    } else {
        value
    }
}

fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        NONE_LISTED.to_string()
    } else {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
