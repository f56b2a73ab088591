mod cli;

use clap::Parser;
use skinscore::config;
use skinscore::error::{Result, SkinScoreError};
use skinscore::history;
use skinscore::report::{self, OutputFormat};
use skinscore::score::{self, validate_issues};
use skinscore::types::config::SkinScoreConfig;
use skinscore::types::issue::AnalysisInput;
use skinscore::types::report::ScoreReport;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_format(flag: Option<cli::ReportFormat>, cfg: &SkinScoreConfig) -> Result<OutputFormat> {
    match flag {
        Some(cli::ReportFormat::Json) => Ok(OutputFormat::Json),
        Some(cli::ReportFormat::Md) => Ok(OutputFormat::Md),
        None => cfg
            .report_format()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map(Option::unwrap_or_default),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    if !path.exists() {
        return Err(SkinScoreError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn run(cli: cli::Cli) -> Result<i32> {
    let loaded = config::load_config(Path::new("."))?;
    if loaded.is_none() {
        tracing::debug!("no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
    }
    let cfg = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let format = resolve_format(cmd.format, &cfg)?;
            let input: AnalysisInput = serde_json::from_str(&read_input(&cmd.input)?)?;
            let issues = input.into_issues();
            tracing::info!(issues = issues.len(), "scoring analysis");

            if cmd.strict || cfg.strict() {
                if let Err(errors) = validate_issues(&issues) {
                    for error in &errors {
                        eprintln!("invalid: {error}");
                    }
                    return Ok(exit_code::BLOCKING);
                }
            }

            let mut options = cfg.scoring_options();
            options.clamp_severity |= cmd.clamp_severity;
            let score_report = ScoreReport::build(&issues, &options);
            println!("{}", report::render(&score_report, format)?);

            if score_report.skipped.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                for name in &score_report.skipped {
                    tracing::warn!(issue = %name, "unrecognized issue skipped");
                }
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Category(cmd) => {
            let format = resolve_format(cmd.format, &cfg)?;
            let category = score::score_category(cmd.score);
            println!("{}", report::render_category(cmd.score, &category, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Improve(cmd) => {
            let format = resolve_format(cmd.format, &cfg)?;
            let improvement = score::calculate_improvement(cmd.previous, cmd.current)?;
            println!("{}", report::render_improvement(&improvement, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Trend(cmd) => {
            let format = resolve_format(cmd.format, &cfg)?;
            let records = history::load_history(&cmd.history)?;
            match history::summarize(&records)? {
                Some(summary) => println!("{}", report::render_trend(&summary, format)?),
                None => println!("trend: no scans recorded"),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
