use anyhow::Context;
use clap::Parser;
use resume_screener::config::cli::{AnalyzeArgs, Command, RankArgs};
use resume_screener::core::codec::load_records;
use resume_screener::core::ranking::{
    format_ranking_table, rank_records, summarize, write_ranking_csv,
};
use resume_screener::domain::ports::Storage;
use resume_screener::utils::error::ScreenerError;
use resume_screener::utils::{logger, validation::Validate};
use resume_screener::{CliConfig, LocalStorage, ResumeScreener, ScreenerConfig};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let outcome = match &config.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Rank(args) => run_rank(args),
    };

    if let Err(err) = outcome {
        match err.downcast_ref::<ScreenerError>() {
            Some(e) => {
                tracing::error!("{:#}", err);
                exit_with(e);
            }
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn exit_with(e: &ScreenerError) -> ! {
    tracing::error!(
        "Screening failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let mut settings = ScreenerConfig::from_file(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(dir) = &args.output_dir {
        settings.output.directory = dir.clone();
    }
    if args.no_reports {
        settings.output.write_reports = false;
    }
    if let Some(bundle) = &args.bundle {
        settings.output.bundle = Some(bundle.clone());
    }
    settings.validate()?;

    let vocabulary = settings.vocabulary()?;
    let texts = args
        .resumes
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .map_err(ScreenerError::from)
                .with_context(|| format!("reading resume {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    let storage = LocalStorage::new(settings.output.directory.clone());
    let screener = ResumeScreener::new(settings.job.clone(), &vocabulary, storage);
    let analyses = screener.analyze_batch(&texts);

    for analysis in &analyses {
        println!("{}", analysis.report);
    }

    let saved = screener.save_results(&settings.output.results_file, &analyses)?;
    println!(
        "Saved {} results to {}",
        saved,
        screener.storage().location(&settings.output.results_file)
    );

    if settings.output.write_reports {
        for location in screener.write_reports(&analyses)? {
            println!("Report: {}", location);
        }
    }

    if let Some(bundle) = &settings.output.bundle {
        let location = screener.export_bundle(bundle, &analyses)?;
        println!("Bundle: {}", location);
    }

    Ok(())
}

fn run_rank(args: &RankArgs) -> anyhow::Result<()> {
    let (dir, file) = split_path(&args.results);
    let storage = LocalStorage::new(dir);
    let records = load_records(&storage, &file)?;

    let ranking = rank_records(&records);
    let summary = summarize(&records);

    println!("{}", format_ranking_table(&ranking));
    println!();
    println!("Total Candidates: {}", summary.candidates);
    println!("Average Score:    {:.1}/100", summary.average_score);
    println!("Recommended:      {}", summary.recommended);

    if let Some(csv_path) = &args.csv {
        let content = write_ranking_csv(&ranking)?;
        std::fs::write(csv_path, content)
            .map_err(ScreenerError::from)
            .with_context(|| format!("writing {}", csv_path.display()))?;
        println!("Ranking CSV: {}", csv_path.display());
    }

    Ok(())
}

fn split_path(path: &Path) -> (String, String) {
    let dir = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    (dir, file)
}
