use crate::domain::model::{PersistedRecord, RecommendationTier};
use crate::utils::error::Result;

/// 批次摘要中計為推薦的最低分數
pub const RECOMMENDED_MIN_SCORE: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub rank: usize,
    pub name: String,
    pub email: String,
    pub total_score: u32,
    pub recommendation: RecommendationTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub candidates: usize,
    pub average_score: f64,
    pub recommended: usize,
}

/// 總分高者在前，同分維持輸入順序
pub fn rank_records(records: &[PersistedRecord]) -> Vec<RankedCandidate> {
    let mut ordered: Vec<&PersistedRecord> = records.iter().collect();
    ordered.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedCandidate {
            rank: index + 1,
            name: record.name.clone(),
            email: record.email.clone(),
            total_score: record.total_score,
            recommendation: record.recommendation,
        })
        .collect()
}

pub fn summarize(records: &[PersistedRecord]) -> BatchSummary {
    let candidates = records.len();
    let average_score = if candidates == 0 {
        0.0
    } else {
        records.iter().map(|r| r.total_score as f64).sum::<f64>() / candidates as f64
    };
    let recommended = records
        .iter()
        .filter(|r| r.total_score >= RECOMMENDED_MIN_SCORE)
        .count();

    BatchSummary {
        candidates,
        average_score,
        recommended,
    }
}

pub fn write_ranking_csv(ranking: &[RankedCandidate]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "name", "email", "total_score", "recommendation"])?;

    for candidate in ranking {
        writer.write_record([
            candidate.rank.to_string(),
            candidate.name.clone(),
            candidate.email.clone(),
            candidate.total_score.to_string(),
            candidate.recommendation.label().to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 終端機輸出用的固定寬度表格
pub fn format_ranking_table(ranking: &[RankedCandidate]) -> String {
    let mut lines = vec![
        format!(
            "{:<6} {:<25} {:<30} {:<8} {:<20}",
            "Rank", "Name", "Email", "Score", "Status"
        ),
        "-".repeat(92),
    ];

    for candidate in ranking {
        lines.push(format!(
            "{:<6} {:<25} {:<30} {:<8} {:<20}",
            candidate.rank,
            truncate(&candidate.name, 24),
            truncate(&candidate.email, 29),
            candidate.total_score,
            candidate.recommendation.label()
        ));
    }

    lines.join("\n")
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
