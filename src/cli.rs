use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ai-ready",
    version,
    about = "Score how readable a website is to AI crawlers and agents"
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
    /// Analyze a page and its domain files
    Analyze(AnalyzeCommand),
    /// List the checks and their scoring weights
    Checks(ChecksCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub url: String,

    /// Analyze this HTML file instead of fetching the page
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Scraper metadata (JSON object) for --html-file
    #[arg(long, requires = "html_file")]
    pub metadata_file: Option<PathBuf>,

    /// Skip all network requests; domain file checks report not found
    #[arg(long)]
    pub offline: bool,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Exit with code 2 when the overall score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

#[derive(Args)]
pub struct ChecksCommand {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
