use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "resume-screener")]
#[command(about = "Screen resumes against job requirements and rank candidates")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze resume files and save results, reports and an optional bundle
    Analyze(AnalyzeArgs),
    /// Rank candidates from a saved results file
    Rank(RankArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    #[arg(long, help = "TOML file with the [job] table")]
    pub config: PathBuf,

    #[arg(long, help = "Overrides [output] directory")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Do not write per-candidate report files")]
    pub no_reports: bool,

    #[arg(long, help = "Zip file name for the export bundle")]
    pub bundle: Option<String>,

    #[arg(required = true, help = "Plain-text resume files")]
    pub resumes: Vec<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct RankArgs {
    #[arg(long, help = "Results JSON written by `analyze`")]
    pub results: PathBuf,

    #[arg(long, help = "Also write the ranking as CSV")]
    pub csv: Option<PathBuf>,
}

impl Validate for AnalyzeArgs {
    fn validate(&self) -> Result<()> {
        validate_file_extension("config", &self.config.to_string_lossy(), &["toml"])?;

        if let Some(dir) = &self.output_dir {
            validate_path("output_dir", dir)?;
        }
        if let Some(bundle) = &self.bundle {
            validate_file_extension("bundle", bundle, &["zip"])?;
        }
        for (index, resume) in self.resumes.iter().enumerate() {
            validate_path(&format!("resumes[{}]", index), &resume.to_string_lossy())?;
        }
        Ok(())
    }
}

impl Validate for RankArgs {
    fn validate(&self) -> Result<()> {
        validate_file_extension("results", &self.results.to_string_lossy(), &["json"])?;
        if let Some(csv) = &self.csv {
            validate_file_extension("csv", &csv.to_string_lossy(), &["csv"])?;
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Analyze(args) => args.validate(),
            Command::Rank(args) => args.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_command() {
        let config = CliConfig::try_parse_from([
            "resume-screener",
            "analyze",
            "--config",
            "job.toml",
            "--bundle",
            "out.zip",
            "--verbose",
            "alice.txt",
            "bob.txt",
        ])
        .unwrap();

        assert!(config.verbose);
        match &config.command {
            Command::Analyze(args) => {
                assert_eq!(args.config, PathBuf::from("job.toml"));
                assert_eq!(args.bundle.as_deref(), Some("out.zip"));
                assert_eq!(args.resumes.len(), 2);
                assert!(!args.no_reports);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_analyze_requires_resumes() {
        assert!(CliConfig::try_parse_from(["resume-screener", "analyze", "--config", "job.toml"]).is_err());
    }

    #[test]
    fn test_rank_validation() {
        let config = CliConfig::try_parse_from([
            "resume-screener",
            "rank",
            "--results",
            "results.json",
            "--csv",
            "ranking.txt",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }
}
