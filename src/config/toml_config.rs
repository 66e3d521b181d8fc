use crate::config::requirements::requirements_at;
use crate::core::vocabulary::Vocabulary;
use crate::domain::model::JobRequirements;
use crate::utils::error::{Result, ScreenerError};
use crate::utils::validation::{
    deserialize_error, validate_file_extension, validate_path, Validate,
};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./screening-output";
pub const DEFAULT_RESULTS_FILE: &str = "results.json";

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// 設定檔的區段先保留原始值，之後各自反序列化，錯誤才能標出區段名稱。
#[derive(Debug, Deserialize)]
struct ConfigFile {
    job: Option<Value>,
    vocabulary: Option<Value>,
    output: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub results_file: String,
    pub write_reports: bool,
    pub bundle: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
            results_file: DEFAULT_RESULTS_FILE.to_string(),
            write_reports: true,
            bundle: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenerConfig {
    pub job: JobRequirements,
    pub extra_skills: Vec<String>,
    pub output: OutputConfig,
}

impl ScreenerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ScreenerError::config(format!(
                "cannot read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        let file: ConfigFile = toml::from_str(&processed)
            .map_err(|e| ScreenerError::config(format!("TOML parsing error: {}", e)))?;

        let job_value = file
            .job
            .ok_or_else(|| ScreenerError::validation("job", "Missing [job] table"))?;
        let job = requirements_at(&job_value, "job")?;

        let vocabulary = match file.vocabulary {
            Some(value) => VocabularyConfig::deserialize(&value)
                .map_err(|e| deserialize_error("vocabulary", e))?,
            None => VocabularyConfig::default(),
        };

        let output = match file.output {
            Some(value) => {
                OutputConfig::deserialize(&value).map_err(|e| deserialize_error("output", e))?
            }
            None => OutputConfig::default(),
        };

        Ok(Self {
            job,
            extra_skills: vocabulary.extra_skills,
            output,
        })
    }

    /// 標準詞彙表加上 `[vocabulary] extra_skills`
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        Vocabulary::extended(&self.extra_skills)
    }
}

/// 替換環境變數 (例如 ${API_KEY})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_RE
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

impl Validate for ScreenerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.directory", &self.output.directory)?;
        validate_file_extension("output.results_file", &self.output.results_file, &["json"])?;

        if let Some(bundle) = &self.output.bundle {
            validate_file_extension("output.bundle", bundle, &["zip"])?;
        }

        self.vocabulary().map(|_| ())
    }
}
