//! 加權匹配分數：技能 50、經驗 30、學歷 20。

use crate::domain::model::{
    CandidateProfile, EducationLevel, JobRequirements, MatchResult, RecommendationTier,
    ScoreBreakdown,
};
use std::collections::HashSet;

/// 有學歷但低於要求等級時給的分數
pub const EDUCATION_PARTIAL_CREDIT: u32 = 10;

pub fn calculate_match_score(
    profile: &CandidateProfile,
    requirements: &JobRequirements,
) -> MatchResult {
    let candidate_skills: HashSet<String> =
        profile.skills.iter().map(|skill| skill.to_lowercase()).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = requirements
        .required_skills()
        .iter()
        .cloned()
        .partition(|skill| candidate_skills.contains(&skill.to_lowercase()));

    let breakdown = ScoreBreakdown::new(
        skills_score(matched_skills.len(), requirements.required_skills().len()),
        experience_score(profile.experience_years, requirements.required_experience()),
        education_score(profile.education_level, requirements.required_education()),
    );

    MatchResult {
        tier: classify(breakdown.total_score),
        breakdown,
        matched_skills,
        missing_skills,
    }
}

pub fn classify(total_score: u32) -> RecommendationTier {
    RecommendationTier::from_score(total_score)
}

pub fn skills_score(matched: usize, required: usize) -> u32 {
    if required == 0 {
        return ScoreBreakdown::SKILLS_MAX;
    }
    let matched = matched.min(required);
    round_share(ScoreBreakdown::SKILLS_MAX, matched as u64, required as u64)
}

pub fn experience_score(candidate_years: u32, required_years: u32) -> u32 {
    if required_years == 0 || candidate_years >= required_years {
        ScoreBreakdown::EXPERIENCE_MAX
    } else {
        round_share(
            ScoreBreakdown::EXPERIENCE_MAX,
            candidate_years as u64,
            required_years as u64,
        )
    }
}

pub fn education_score(
    candidate: Option<EducationLevel>,
    required: Option<EducationLevel>,
) -> u32 {
    match (candidate, required) {
        (_, None) => ScoreBreakdown::EDUCATION_MAX,
        (Some(have), Some(need)) if have >= need => ScoreBreakdown::EDUCATION_MAX,
        (Some(_), Some(_)) => EDUCATION_PARTIAL_CREDIT,
        (None, Some(_)) => 0,
    }
}

/// 以整數運算計算 `round(max * numerator / denominator)`，0.5 進位。
/// 需滿足 `numerator <= denominator` 且 `denominator > 0`
fn round_share(max: u32, numerator: u64, denominator: u64) -> u32 {
    let doubled = 2 * max as u64 * numerator;
    ((doubled + denominator) / (2 * denominator)) as u32
}

/// 必要技能符合百分比 (整數)，顯示用
pub fn skills_match_percent(matched: usize, required: usize) -> u32 {
    if required == 0 {
        100
    } else {
        round_share(100, matched.min(required) as u64, required as u64)
    }
}
