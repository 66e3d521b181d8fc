use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const UNKNOWN_NAME: &str = "Unknown";

/// 學歷等級，由低到高宣告，derive 的排序即為等級高低
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    /// 由高到低
    pub const RANKED: [EducationLevel; 5] = [
        EducationLevel::Doctorate,
        EducationLevel::Master,
        EducationLevel::Bachelor,
        EducationLevel::Associate,
        EducationLevel::HighSchool,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associate => "Associate",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::Doctorate => "Doctorate",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match key.as_str() {
            "phd" | "doctorate" | "doctoral" => Ok(EducationLevel::Doctorate),
            "master" | "masters" => Ok(EducationLevel::Master),
            "bachelor" | "bachelors" => Ok(EducationLevel::Bachelor),
            "associate" | "associates" => Ok(EducationLevel::Associate),
            "highschool" => Ok(EducationLevel::HighSchool),
            _ => Err(format!(
                "unknown education level '{}' (expected one of: High School, Associate, Bachelor, Master, PhD, none)",
                s
            )),
        }
    }
}

/// 解析學歷欄位，`""` 與 `none` 代表沒有要求
pub fn parse_education(s: &str) -> Result<Option<EducationLevel>, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        trimmed.parse().map(Some)
    }
}

pub fn education_display(level: Option<EducationLevel>) -> &'static str {
    level.map(EducationLevel::display_name).unwrap_or("none")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: BTreeSet<String>,
    pub experience_years: u32,
    pub education_level: Option<EducationLevel>,
    pub raw_text: String,
}

/// 單一職缺的篩選條件。只能透過 `new` 或 `config::requirements` 的
/// 驗證建構子建立，技能清單一定已去重
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequirements {
    position: String,
    required_skills: Vec<String>,
    required_experience: u32,
    required_education: Option<EducationLevel>,
}

impl JobRequirements {
    pub fn new<I, T>(
        position: impl Into<String>,
        required_skills: I,
        required_experience: u32,
        required_education: Option<EducationLevel>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let required_skills = required_skills
            .into_iter()
            .map(|skill| skill.as_ref().trim().to_string())
            .filter(|skill| !skill.is_empty())
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .collect();

        Self {
            position: position.into(),
            required_skills,
            required_experience,
            required_education,
        }
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn required_experience(&self) -> u32 {
        self.required_experience
    }

    pub fn required_education(&self) -> Option<EducationLevel> {
        self.required_education
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub skills_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub total_score: u32,
}

impl ScoreBreakdown {
    pub const SKILLS_MAX: u32 = 50;
    pub const EXPERIENCE_MAX: u32 = 30;
    pub const EDUCATION_MAX: u32 = 20;

    pub fn new(skills_score: u32, experience_score: u32, education_score: u32) -> Self {
        Self {
            skills_score,
            experience_score,
            education_score,
            total_score: skills_score + experience_score + education_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationTier {
    #[serde(rename = "HIGHLY RECOMMENDED")]
    HighlyRecommended,
    #[serde(rename = "RECOMMENDED")]
    Recommended,
    #[serde(rename = "MAYBE")]
    Maybe,
    #[serde(rename = "NOT RECOMMENDED")]
    NotRecommended,
}

impl RecommendationTier {
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            80.. => RecommendationTier::HighlyRecommended,
            60..=79 => RecommendationTier::Recommended,
            40..=59 => RecommendationTier::Maybe,
            _ => RecommendationTier::NotRecommended,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecommendationTier::HighlyRecommended => "HIGHLY RECOMMENDED",
            RecommendationTier::Recommended => "RECOMMENDED",
            RecommendationTier::Maybe => "MAYBE",
            RecommendationTier::NotRecommended => "NOT RECOMMENDED",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RecommendationTier::HighlyRecommended => "Excellent match for the position",
            RecommendationTier::Recommended => "Good candidate, consider for interview",
            RecommendationTier::Maybe => "Potential candidate with some skill gaps",
            RecommendationTier::NotRecommended => "Significant gaps in requirements",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub breakdown: ScoreBreakdown,
    pub tier: RecommendationTier,
    /// 候選人具備的必要技能，順序與拼寫依照職缺需求
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// 單份履歷的分析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub profile: CandidateProfile,
    pub result: MatchResult,
    pub report: String,
}

/// 寫入檔案的扁平紀錄：個人資料加上分數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    #[serde(serialize_with = "serialize_education", deserialize_with = "deserialize_education")]
    pub education: Option<EducationLevel>,
    pub skills_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    pub total_score: u32,
    pub recommendation: RecommendationTier,
}

impl PersistedRecord {
    pub fn from_parts(profile: &CandidateProfile, result: &MatchResult) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            skills: profile.skills.iter().cloned().collect(),
            experience_years: profile.experience_years,
            education: profile.education_level,
            skills_score: result.breakdown.skills_score,
            experience_score: result.breakdown.experience_score,
            education_score: result.breakdown.education_score,
            total_score: result.breakdown.total_score,
            recommendation: result.tier,
        }
    }

    /// 重建個人資料。原始履歷文字不會保存
    pub fn profile(&self) -> CandidateProfile {
        CandidateProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: self.skills.iter().cloned().collect(),
            experience_years: self.experience_years,
            education_level: self.education,
            raw_text: String::new(),
        }
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            skills_score: self.skills_score,
            experience_score: self.experience_score,
            education_score: self.education_score,
            total_score: self.total_score,
        }
    }
}

impl From<&Analysis> for PersistedRecord {
    fn from(analysis: &Analysis) -> Self {
        PersistedRecord::from_parts(&analysis.profile, &analysis.result)
    }
}

fn serialize_education<S>(level: &Option<EducationLevel>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(education_display(*level))
}

fn deserialize_education<'de, D>(deserializer: D) -> Result<Option<EducationLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_education(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_levels_are_ranked() {
        assert!(EducationLevel::Doctorate > EducationLevel::Master);
        assert!(EducationLevel::Master > EducationLevel::Bachelor);
        assert!(EducationLevel::Bachelor > EducationLevel::Associate);
        assert!(EducationLevel::Associate > EducationLevel::HighSchool);

        let mut sorted = EducationLevel::RANKED.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, EducationLevel::RANKED.to_vec());
    }

    #[test]
    fn test_parse_education_aliases() {
        assert_eq!(parse_education("PhD").unwrap(), Some(EducationLevel::Doctorate));
        assert_eq!(parse_education("Ph.D.").unwrap(), Some(EducationLevel::Doctorate));
        assert_eq!(parse_education("masters").unwrap(), Some(EducationLevel::Master));
        assert_eq!(parse_education("Bachelor").unwrap(), Some(EducationLevel::Bachelor));
        assert_eq!(parse_education("High School").unwrap(), Some(EducationLevel::HighSchool));
        assert_eq!(parse_education("none").unwrap(), None);
        assert_eq!(parse_education("  ").unwrap(), None);
        assert!(parse_education("kindergarten").is_err());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RecommendationTier::from_score(100), RecommendationTier::HighlyRecommended);
        assert_eq!(RecommendationTier::from_score(80), RecommendationTier::HighlyRecommended);
        assert_eq!(RecommendationTier::from_score(79), RecommendationTier::Recommended);
        assert_eq!(RecommendationTier::from_score(60), RecommendationTier::Recommended);
        assert_eq!(RecommendationTier::from_score(59), RecommendationTier::Maybe);
        assert_eq!(RecommendationTier::from_score(40), RecommendationTier::Maybe);
        assert_eq!(RecommendationTier::from_score(39), RecommendationTier::NotRecommended);
        assert_eq!(RecommendationTier::from_score(0), RecommendationTier::NotRecommended);
    }

    #[test]
    fn test_job_requirements_dedupes_skills_case_insensitively() {
        let requirements = JobRequirements::new(
            "Developer",
            ["Python", "python", " SQL ", "", "Git"],
            3,
            Some(EducationLevel::Bachelor),
        );
        assert_eq!(requirements.required_skills(), ["Python", "SQL", "Git"]);
    }

    #[test]
    fn test_tier_serializes_as_label() {
        let json = serde_json::to_string(&RecommendationTier::NotRecommended).unwrap();
        assert_eq!(json, "\"NOT RECOMMENDED\"");
        assert_eq!(
            RecommendationTier::Maybe.to_string(),
            "MAYBE - Potential candidate with some skill gaps"
        );
    }
}
