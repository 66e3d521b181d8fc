//! 篩選結果的 JSON 存取。
//!
//! 檔案內容是扁平紀錄的陣列。載入是全有或全無：任何一筆紀錄格式錯誤，
//! 整次載入即失敗，不回傳任何紀錄。

use crate::domain::model::{PersistedRecord, RecommendationTier, ScoreBreakdown};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, ScreenerError};
use serde::Deserialize;

pub fn encode_records(records: &[PersistedRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn decode_records(content: &str) -> Result<Vec<PersistedRecord>> {
    let document: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| ScreenerError::parse(None, format!("invalid JSON: {}", e)))?;

    let items = document
        .as_array()
        .ok_or_else(|| ScreenerError::parse(None, "expected an array of records"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let record = PersistedRecord::deserialize(item)
                .map_err(|e| ScreenerError::parse(Some(index), e.to_string()))?;
            check_scores(&record).map_err(|message| ScreenerError::parse(Some(index), message))?;
            Ok(record)
        })
        .collect()
}

/// serde 無法表達的跨欄位規則
fn check_scores(record: &PersistedRecord) -> std::result::Result<(), String> {
    let limits = [
        ("skills_score", record.skills_score, ScoreBreakdown::SKILLS_MAX),
        ("experience_score", record.experience_score, ScoreBreakdown::EXPERIENCE_MAX),
        ("education_score", record.education_score, ScoreBreakdown::EDUCATION_MAX),
    ];
    for (field, value, max) in limits {
        if value > max {
            return Err(format!("{} {} exceeds maximum {}", field, value, max));
        }
    }

    let sum = record.skills_score + record.experience_score + record.education_score;
    if record.total_score != sum {
        return Err(format!(
            "total_score {} does not equal the component sum {}",
            record.total_score, sum
        ));
    }

    let expected = RecommendationTier::from_score(record.total_score);
    if record.recommendation != expected {
        return Err(format!(
            "recommendation '{}' does not match total_score {} (expected '{}')",
            record.recommendation.label(),
            record.total_score,
            expected.label()
        ));
    }

    Ok(())
}

pub fn save_records<S: Storage>(storage: &S, path: &str, records: &[PersistedRecord]) -> Result<usize> {
    let content = encode_records(records)?;
    storage.write_file(path, content.as_bytes())?;

    tracing::debug!(
        "Saved {} records to {}",
        records.len(),
        storage.location(path)
    );
    Ok(records.len())
}

pub fn load_records<S: Storage>(storage: &S, path: &str) -> Result<Vec<PersistedRecord>> {
    let bytes = storage.read_file(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| ScreenerError::parse(None, format!("file is not valid UTF-8: {}", e)))?;

    match decode_records(&content) {
        Ok(records) => {
            tracing::debug!("Loaded {} records from {}", records.len(), storage.location(path));
            Ok(records)
        }
        Err(e) => {
            tracing::warn!("Rejected results file {}: {}", storage.location(path), e);
            Err(e)
        }
    }
}
