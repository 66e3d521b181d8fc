use crate::core::extract::{
    extract_contact, extract_education, extract_experience, extract_name, extract_skills,
};
use crate::core::normalize::normalize;
use crate::core::vocabulary::Vocabulary;
use crate::domain::model::{CandidateProfile, UNKNOWN_NAME};

/// 對 `raw_text` 執行所有擷取器，找不到的欄位套用預設值
pub fn build_profile(raw_text: &str, vocabulary: &Vocabulary) -> CandidateProfile {
    let normalized = normalize(raw_text);
    let contact = extract_contact(raw_text);

    CandidateProfile {
        name: extract_name(raw_text).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        email: contact.email.unwrap_or_default(),
        phone: contact.phone.unwrap_or_default(),
        skills: extract_skills(&normalized, vocabulary),
        experience_years: extract_experience(&normalized).unwrap_or(0),
        education_level: extract_education(&normalized, vocabulary),
        raw_text: raw_text.to_string(),
    }
}
