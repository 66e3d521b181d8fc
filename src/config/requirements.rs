use crate::domain::model::{parse_education, JobRequirements};
use crate::utils::error::{Result, ScreenerError};
use crate::utils::validation::{deserialize_error, qualified, validate_non_empty_string};
use serde::Deserialize;
use serde_json::Value;

/// `[job]` 區段或 JSON 職缺需求的原始形狀，四個欄位皆為必填。
#[derive(Debug, Clone, Deserialize)]
pub struct RawJobRequirements {
    pub position: String,
    pub required_skills: Vec<String>,
    pub required_experience: u32,
    pub required_education: String,
}

impl RawJobRequirements {
    /// 檢查 serde 無法表達的規則：職稱不可空白、學歷必須是已知等級。
    /// 錯誤欄位名稱會加上 `section` 前綴。
    pub fn into_requirements(self, section: &str) -> Result<JobRequirements> {
        validate_non_empty_string(&qualified(section, "position"), &self.position)?;

        let required_education = parse_education(&self.required_education).map_err(|message| {
            ScreenerError::validation(qualified(section, "required_education"), message)
        })?;

        Ok(JobRequirements::new(
            self.position,
            self.required_skills,
            self.required_experience,
            required_education,
        ))
    }
}

impl JobRequirements {
    /// 從結構化資料建立需求；欄位缺漏或型別錯誤時回傳 `ValidationError`。
    pub fn from_value(value: &Value) -> Result<Self> {
        requirements_at(value, "")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }
}

pub(crate) fn requirements_at(value: &Value, section: &str) -> Result<JobRequirements> {
    let raw = RawJobRequirements::deserialize(value).map_err(|e| match deserialize_error(section, &e) {
        // 無前綴的型別錯誤沒有可指向的區段
        ScreenerError::ValidationError { field, message } if field.is_empty() => {
            ScreenerError::validation("requirements", message)
        }
        other => other,
    })?;
    raw.into_requirements(section)
}
