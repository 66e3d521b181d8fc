use crate::core::codec::encode_records;
use crate::core::ranking::{rank_records, write_ranking_csv};
use crate::domain::model::{Analysis, PersistedRecord};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const RESULTS_ENTRY: &str = "results.json";
pub const RANKING_ENTRY: &str = "ranking.csv";
pub const REPORTS_DIR: &str = "reports";

/// `report_<Name_With_Underscores>_<position>.txt`，position 從 1 開始
pub fn report_file_name(name: &str, position: usize) -> String {
    let stem: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("report_{}_{}.txt", stem, position)
}

/// 將結果 JSON、排名 CSV 與所有報告打包成 ZIP
pub fn build_bundle(analyses: &[Analysis]) -> Result<Vec<u8>> {
    let records: Vec<PersistedRecord> = analyses.iter().map(PersistedRecord::from).collect();
    let results_json = encode_records(&records)?;
    let ranking_csv = write_ranking_csv(&rank_records(&records))?;

    tracing::debug!(
        "Creating bundle with {} files",
        2 + analyses.len()
    );

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    zip.start_file::<_, ()>(RESULTS_ENTRY, FileOptions::default())?;
    zip.write_all(results_json.as_bytes())?;

    zip.start_file::<_, ()>(RANKING_ENTRY, FileOptions::default())?;
    zip.write_all(ranking_csv.as_bytes())?;

    for (index, analysis) in analyses.iter().enumerate() {
        let entry = format!(
            "{}/{}",
            REPORTS_DIR,
            report_file_name(&analysis.profile.name, index + 1)
        );
        zip.start_file::<_, ()>(entry, FileOptions::default())?;
        zip.write_all(analysis.report.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
