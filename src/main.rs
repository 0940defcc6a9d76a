mod cli;

use ai_ready::analyzer::{analyze_website, AnalyzerInput};
use ai_ready::checks::registry;
use ai_ready::config::load_config;
use ai_ready::error::AiReadyError;
use ai_ready::fetch::page::{extract_page_metadata, scrape_page};
use ai_ready::fetch::{Fetcher, HttpFetcher, OfflineFetcher};
use ai_ready::report;
use ai_ready::types::config::Settings;
use ai_ready::types::report::PageMetadata;
use ai_ready::urls::normalize_url;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else if quiet {
        EnvFilter::new("ai_ready=error")
    } else {
        match verbose {
            0 => EnvFilter::new("ai_ready=warn"),
            1 => EnvFilter::new("ai_ready=info"),
            _ => EnvFilter::new("ai_ready=debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(explicit: Option<&Path>) -> Result<Settings, AiReadyError> {
    match load_config(explicit)? {
        Some(cfg) => Ok(cfg.settings()),
        None => Ok(Settings::default()),
    }
}

fn page_input(cmd: &cli::AnalyzeCommand, fetcher: &dyn Fetcher) -> Result<AnalyzerInput, AiReadyError> {
    let url = normalize_url(cmd.url.trim());
    match &cmd.html_file {
        Some(path) => {
            let html = std::fs::read_to_string(path)?;
            let metadata = match &cmd.metadata_file {
                Some(meta_path) => PageMetadata::from_json(&std::fs::read_to_string(meta_path)?)?,
                None => extract_page_metadata(&html, None, &url),
            };
            Ok(AnalyzerInput { url, html, metadata })
        }
        None if cmd.offline => Err(AiReadyError::Fetch(format!(
            "{url}: offline mode requires --html-file"
        ))),
        None => {
            tracing::info!(%url, "Step 1/4: fetching page");
            let page = scrape_page(fetcher, &url)?;
            Ok(AnalyzerInput {
                url: page.url,
                html: page.html,
                metadata: page.metadata,
            })
        }
    }
}

fn analyze(cmd: &cli::AnalyzeCommand) -> Result<i32, AiReadyError> {
    let settings = load_settings(cmd.config.as_deref())?;
    let fetcher: Box<dyn Fetcher> = if cmd.offline {
        Box::new(OfflineFetcher)
    } else {
        Box::new(HttpFetcher::new(settings.timeout_ms, &settings.user_agent))
    };

    let input = page_input(cmd, fetcher.as_ref())?;
    let result = analyze_website(&input, fetcher.as_ref(), &settings)?;

    let output_format = match cmd.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };
    let rendered = report::render(&result, output_format)?;
    println!("{rendered}");

    match cmd.min_score {
        Some(min) if result.overall_score < min => {
            eprintln!(
                "warning: overall score {} is below --min-score {}",
                result.overall_score, min
            );
            Ok(exit_code::BELOW_THRESHOLD)
        }
        _ => Ok(exit_code::SUCCESS),
    }
}

fn list_checks(cmd: &cli::ChecksCommand) -> Result<i32, AiReadyError> {
    let settings = load_settings(cmd.config.as_deref())?;
    println!("checks:");
    for (info, kind) in registry() {
        println!(
            "- {} [{} {}] weight {:.1}",
            info.id,
            kind.as_str(),
            info.label,
            settings.weight(info.id)
        );
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let json_errors = matches!(
        &cli.command,
        cli::Commands::Analyze(cmd) if matches!(cmd.format, cli::ReportFormat::Json)
    );
    let outcome = match &cli.command {
        cli::Commands::Analyze(cmd) => analyze(cmd),
        cli::Commands::Checks(cmd) => list_checks(cmd),
    };

    match outcome {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            if json_errors {
                if let Ok(payload) = report::json::error_json(&e.to_string()) {
                    println!("{payload}");
                }
            }
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
