//! 啟發式欄位擷取。每個函式都是純函式，找不到欄位時回傳 `None`
//! (或空集合)；預設值由 profile builder 套用，不在這裡處理。

use crate::core::vocabulary::{DegreeTerm, Vocabulary};
use crate::domain::model::EducationLevel;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const NAME_SCAN_LINES: usize = 5;
const NAME_MIN_TOKENS: usize = 2;
const NAME_MAX_TOKENS: usize = 4;

/// 大小寫規則下看起來像姓名的段落標題
const HEADER_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "cv",
    "profile",
    "objective",
    "summary",
];

/// "year(s)" 前面幾個 token 內可以出現數字
const YEAR_WINDOW: usize = 2;
/// 超過此值視為西元年份，而非年資
const MAX_PLAUSIBLE_YEARS: u32 = 60;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}\b").unwrap()
});

// 每個位置依序嘗試：國際格式、國內格式、純數字。皆需至少十位數字
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\+?\d{1,3}[-. ]?(?:\(\d{3}\)|\d{3})[-. ]?\d{3}[-. ]?\d{4}",
        r"|(?:\(\d{3}\)|\d{3})[-. ]?\d{3}[-. ]?\d{4}",
        r"|\+?\d{10,}",
    ))
    .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// 開頭幾行非空行中，第一個像姓名的行
pub fn extract_name(raw_text: &str) -> Option<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    if line.contains('@') || line.chars().any(char::is_numeric) {
        return false;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(NAME_MIN_TOKENS..=NAME_MAX_TOKENS).contains(&tokens.len()) {
        return false;
    }

    let capitalized = tokens
        .iter()
        .all(|token| token.chars().next().is_some_and(char::is_uppercase));

    let is_header = tokens.iter().any(|token| {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        HEADER_WORDS.contains(&word.as_str())
    });

    capitalized && !is_header
}

pub fn extract_email(raw_text: &str) -> Option<String> {
    EMAIL_RE.find(raw_text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(raw_text: &str) -> Option<String> {
    PHONE_RE.find(raw_text).map(|m| m.as_str().to_string())
}

pub fn extract_contact(raw_text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(raw_text),
        phone: extract_phone(raw_text),
    }
}

/// `normalized` 中出現的所有詞彙表技能 (標準名稱)
pub fn extract_skills(normalized: &str, vocabulary: &Vocabulary) -> BTreeSet<String> {
    vocabulary
        .skills()
        .iter()
        .filter(|term| term.is_found_in(normalized))
        .map(|term| term.name().to_string())
        .collect()
}

/// 文中最大的 "N years"。履歷摘要寫總年資、各職位寫較短年資，
/// 所以取最大值近似總年資
pub fn extract_experience(normalized: &str) -> Option<u32> {
    let tokens: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| matches!(**token, "year" | "years" | "yr" | "yrs"))
        .filter_map(|(index, _)| {
            tokens[index.saturating_sub(YEAR_WINDOW)..index]
                .iter()
                .rev()
                .find_map(|token| {
                    token
                        .parse::<u32>()
                        .ok()
                        .filter(|years| *years <= MAX_PLAUSIBLE_YEARS)
                })
        })
        .max()
}

/// 文中任何位置提到的最高學歷
pub fn extract_education(normalized: &str, vocabulary: &Vocabulary) -> Option<EducationLevel> {
    vocabulary
        .degrees()
        .iter()
        .filter(|degree| degree.is_found_in(normalized))
        .map(DegreeTerm::level)
        .max()
}
