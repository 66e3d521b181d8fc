//! 擷取用的唯讀查詢表：技能詞彙與各學歷等級的關鍵字。
//!
//! 標準表每個 process 只編譯一次。擷取器不會自行取用，
//! 由呼叫端傳入 `&Vocabulary`。

use crate::domain::model::EducationLevel;
use crate::utils::error::{Result, ScreenerError};
use regex::Regex;
use std::sync::LazyLock;

/// (標準名稱, 小寫比對詞)
const SKILL_TABLE: &[(&str, &str)] = &[
    // 程式語言
    ("Python", "python"),
    ("Java", "java"),
    ("JavaScript", "javascript"),
    ("TypeScript", "typescript"),
    ("C++", "c++"),
    ("C#", "c#"),
    ("Ruby", "ruby"),
    ("PHP", "php"),
    ("Swift", "swift"),
    ("Kotlin", "kotlin"),
    ("Rust", "rust"),
    ("HTML", "html"),
    ("CSS", "css"),
    // 框架
    ("React", "react"),
    ("Angular", "angular"),
    ("Vue", "vue"),
    ("Node.js", "node.js"),
    ("Django", "django"),
    ("Flask", "flask"),
    ("Spring Boot", "spring boot"),
    // 資料庫
    ("SQL", "sql"),
    ("MongoDB", "mongodb"),
    ("PostgreSQL", "postgresql"),
    ("MySQL", "mysql"),
    ("Oracle", "oracle"),
    ("NoSQL", "nosql"),
    ("Redis", "redis"),
    // 雲端與部署
    ("AWS", "aws"),
    ("Azure", "azure"),
    ("GCP", "gcp"),
    ("Docker", "docker"),
    ("Kubernetes", "kubernetes"),
    ("Jenkins", "jenkins"),
    ("Git", "git"),
    ("DevOps", "devops"),
    ("CI/CD", "ci/cd"),
    ("Microservices", "microservices"),
    ("REST API", "rest api"),
    ("GraphQL", "graphql"),
    // 資料與機器學習
    ("Machine Learning", "machine learning"),
    ("Deep Learning", "deep learning"),
    ("AI", "ai"),
    ("Data Science", "data science"),
    ("NLP", "nlp"),
    ("Text Processing", "text processing"),
    ("Data Extraction", "data extraction"),
    ("JSON", "json"),
    ("Algorithms", "algorithms"),
    ("Web Scraping", "web scraping"),
    ("Automation", "automation"),
    ("Testing", "testing"),
    ("Debugging", "debugging"),
    // 流程
    ("Agile", "agile"),
    ("Scrum", "scrum"),
    // 辦公與 BI
    ("Excel", "excel"),
    ("PowerPoint", "powerpoint"),
    ("Word", "word"),
    ("Tableau", "tableau"),
    ("Power BI", "power bi"),
    // 軟技能
    ("Leadership", "leadership"),
    ("Communication", "communication"),
    ("Project Management", "project management"),
    ("Problem Solving", "problem solving"),
    ("Teamwork", "teamwork"),
    ("Analytical", "analytical"),
    ("Critical Thinking", "critical thinking"),
    ("Time Management", "time management"),
];

const DEGREE_TABLE: &[(EducationLevel, &[&str])] = &[
    (
        EducationLevel::Doctorate,
        &["phd", "ph.d", "doctorate", "doctoral", "doctor of"],
    ),
    // 只收學位寫法，"Scrum Master" 這類職稱不算
    (
        EducationLevel::Master,
        &[
            "master of",
            "master in",
            "master's",
            "masters",
            "master degree",
            "mba",
            "m.s.",
            "m.sc",
            "msc",
            "m.a.",
            "m.tech",
        ],
    ),
    (
        EducationLevel::Bachelor,
        &["bachelor", "bachelors", "bachelor's", "b.s.", "b.sc", "bsc", "b.a.", "b.tech"],
    ),
    // "Associate Software Engineer" 之類的職稱不算
    (
        EducationLevel::Associate,
        &[
            "associate degree",
            "associate's",
            "associate of",
            "associate in",
            "associates",
            "associates degree",
            "a.a.s",
            "a.a.",
            "a.s.",
        ],
    ),
    (
        EducationLevel::HighSchool,
        &["high school", "ged", "secondary school"],
    ),
];

static STANDARD: LazyLock<Vocabulary> = LazyLock::new(|| {
    let skills = SKILL_TABLE
        .iter()
        .map(|(name, phrase)| SkillTerm::compile(name, phrase))
        .collect::<Result<Vec<_>>>()
        .expect("built-in skill phrases are escaped and always compile");

    let degrees = DEGREE_TABLE
        .iter()
        .map(|(level, phrases)| DegreeTerm::compile(*level, phrases))
        .collect::<Result<Vec<_>>>()
        .expect("built-in degree phrases are escaped and always compile");

    Vocabulary { skills, degrees }
});

#[derive(Debug, Clone)]
pub struct SkillTerm {
    name: String,
    pattern: Regex,
}

impl SkillTerm {
    fn compile(name: &str, phrase: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: phrase_pattern(&[phrase])?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `normalized` 必須已轉小寫
    pub fn is_found_in(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

#[derive(Debug, Clone)]
pub struct DegreeTerm {
    level: EducationLevel,
    pattern: Regex,
}

impl DegreeTerm {
    fn compile(level: EducationLevel, phrases: &[&str]) -> Result<Self> {
        Ok(Self {
            level,
            pattern: phrase_pattern(phrases)?,
        })
    }

    pub fn level(&self) -> EducationLevel {
        self.level
    }

    pub fn is_found_in(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    skills: Vec<SkillTerm>,
    /// 高等級在前
    degrees: Vec<DegreeTerm>,
}

impl Vocabulary {
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// 標準表加上呼叫端提供的技能。名稱已存在 (不分大小寫) 的會略過
    pub fn extended<S: AsRef<str>>(extra_skills: &[S]) -> Result<Vocabulary> {
        let mut vocabulary = Self::standard().clone();

        for extra in extra_skills {
            let name = extra.as_ref().trim();
            if name.is_empty() {
                return Err(ScreenerError::config("extra skill names cannot be empty"));
            }
            if vocabulary.skill(name).is_some() {
                tracing::debug!("Skill '{}' is already in the vocabulary", name);
                continue;
            }
            vocabulary
                .skills
                .push(SkillTerm::compile(name, &name.to_lowercase())?);
        }

        Ok(vocabulary)
    }

    pub fn skills(&self) -> &[SkillTerm] {
        &self.skills
    }

    pub fn degrees(&self) -> &[DegreeTerm] {
        &self.degrees
    }

    pub fn skill(&self, name: &str) -> Option<&SkillTerm> {
        self.skills
            .iter()
            .find(|term| term.name.eq_ignore_ascii_case(name))
    }
}

/// 以完整 token 比對 `phrases`：前後字元必須是非英數字或文字邊界。
/// 適用於以標點開頭或結尾的詞 (`c++`、`node.js`)，`\b` 做不到
fn phrase_pattern(phrases: &[&str]) -> Result<Regex> {
    let alternatives = phrases
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");

    let source = format!(r"(?:^|[^\p{{L}}\p{{N}}_])(?:{})(?:$|[^\p{{L}}\p{{N}}_])", alternatives);

    Regex::new(&source).map_err(|e| ScreenerError::config(format!("invalid vocabulary term: {}", e)))
}
