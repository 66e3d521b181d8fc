use crate::core::codec::{load_records, save_records};
use crate::core::export::{build_bundle, report_file_name, REPORTS_DIR};
use crate::core::profile::build_profile;
use crate::core::report::render_report;
use crate::core::scoring::calculate_match_score;
use crate::core::vocabulary::Vocabulary;
use crate::domain::model::{Analysis, JobRequirements, PersistedRecord};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// 依單一職缺需求篩選履歷
pub struct ResumeScreener<'v, S: Storage> {
    requirements: JobRequirements,
    vocabulary: &'v Vocabulary,
    storage: S,
}

impl<'v, S: Storage> ResumeScreener<'v, S> {
    pub fn new(requirements: JobRequirements, vocabulary: &'v Vocabulary, storage: S) -> Self {
        Self {
            requirements,
            vocabulary,
            storage,
        }
    }

    pub fn requirements(&self) -> &JobRequirements {
        &self.requirements
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn analyze(&self, raw_text: &str) -> Analysis {
        let profile = build_profile(raw_text, self.vocabulary);
        let result = calculate_match_score(&profile, &self.requirements);
        let report = render_report(&profile, &self.requirements, &result);

        tracing::debug!(
            "Analyzed {}: {}/100 ({})",
            profile.name,
            result.breakdown.total_score,
            result.tier.label()
        );

        Analysis {
            profile,
            result,
            report,
        }
    }

    pub fn analyze_batch<T: AsRef<str>>(&self, texts: &[T]) -> Vec<Analysis> {
        tracing::info!(
            "Screening {} resumes for {}",
            texts.len(),
            self.requirements.position()
        );

        let analyses: Vec<Analysis> = texts
            .iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect();

        tracing::info!("Finished screening {} resumes", analyses.len());
        analyses
    }

    pub fn save_results(&self, path: &str, analyses: &[Analysis]) -> Result<usize> {
        let records: Vec<PersistedRecord> = analyses.iter().map(PersistedRecord::from).collect();
        let saved = save_records(&self.storage, path, &records)?;
        tracing::info!("Saved {} results to {}", saved, self.storage.location(path));
        Ok(saved)
    }

    pub fn load_results(&self, path: &str) -> Result<Vec<PersistedRecord>> {
        load_records(&self.storage, path)
    }

    /// 每份分析寫出一個報告檔，回傳各檔案位置
    pub fn write_reports(&self, analyses: &[Analysis]) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(analyses.len());

        for (index, analysis) in analyses.iter().enumerate() {
            let path = format!(
                "{}/{}",
                REPORTS_DIR,
                report_file_name(&analysis.profile.name, index + 1)
            );
            self.storage.write_file(&path, analysis.report.as_bytes())?;
            tracing::debug!("Wrote report {}", self.storage.location(&path));
            written.push(self.storage.location(&path));
        }

        Ok(written)
    }

    pub fn export_bundle(&self, path: &str, analyses: &[Analysis]) -> Result<String> {
        let bundle = build_bundle(analyses)?;
        tracing::debug!("Writing bundle ({} bytes) to storage", bundle.len());
        self.storage.write_file(path, &bundle)?;
        Ok(self.storage.location(path))
    }
}
