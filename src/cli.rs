use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skinscore",
    version,
    about = "Skin health score derivation from detected skin issues"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an analysis result (JSON issues array or {"issues": [...]})
    Score(ScoreCommand),
    /// Show the category for a score
    Category(CategoryCommand),
    /// Compare a previous score with a current one
    Improve(ImproveCommand),
    /// Summarize a scan history file
    Trend(TrendCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Analysis JSON file, or "-" for stdin
    pub input: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Reject unrecognized names and out-of-range values
    #[arg(long)]
    pub strict: bool,
    /// Clamp severities to 0-100 before scoring
    #[arg(long)]
    pub clamp_severity: bool,
}

#[derive(Args)]
pub struct CategoryCommand {
    #[arg(allow_negative_numbers = true)]
    pub score: i32,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ImproveCommand {
    #[arg(allow_negative_numbers = true)]
    pub previous: i32,
    #[arg(allow_negative_numbers = true)]
    pub current: i32,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TrendCommand {
    pub history: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
