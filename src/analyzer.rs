use crate::checks::{run_file_checks, run_html_checks, CheckContext, FileCheckContext};
use crate::error::{AiReadyError, Result};
use crate::fetch::Fetcher;
use crate::scoring::overall_score;
use crate::types::config::Settings;
use crate::types::report::{AnalysisResult, PageMetadata, ResultMetadata};
use crate::urls::{base_url, hostname, normalize_url};
use std::time::Instant;

/// Characters of raw HTML echoed back for auditing.
pub const HTML_ECHO_CHARS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct AnalyzerInput {
    pub url: String,
    pub html: String,
    pub metadata: PageMetadata,
}

pub fn analyze_website(
    input: &AnalyzerInput,
    fetcher: &dyn Fetcher,
    settings: &Settings,
) -> Result<AnalysisResult> {
    let url = normalize_url(input.url.trim());
    let base = base_url(&url)?;
    if input.html.trim().is_empty() {
        return Err(AiReadyError::EmptyContent(url));
    }

    tracing::info!("Step 2/4: analyzing HTML content");
    let started = Instant::now();
    let context = CheckContext::new(&input.html, &input.metadata, &url);
    let html_checks = run_html_checks(&context);
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Step 2/4: HTML analysis completed"
    );

    tracing::info!("Step 3/4: checking robots.txt, sitemap.xml, llms.txt");
    let started = Instant::now();
    let file_context = FileCheckContext { base_url: base };
    let file_checks = run_file_checks(&file_context, fetcher, settings);
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Step 3/4: file checks completed"
    );

    tracing::info!("Step 4/4: calculating final score");
    let mut checks = file_checks.into_vec();
    checks.extend(html_checks);
    let breakdown = overall_score(&checks, &url, settings)?;
    tracing::info!(
        domain = %hostname(&url)?,
        base = breakdown.weighted_base,
        content_bonus = breakdown.content_bonus,
        reputation_bonus = breakdown.reputation_bonus,
        overall = breakdown.overall,
        "Step 4/4: final score"
    );

    Ok(AnalysisResult {
        success: true,
        overall_score: breakdown.overall,
        checks,
        html_content: input.html.chars().take(HTML_ECHO_CHARS).collect(),
        metadata: ResultMetadata {
            title: input.metadata.text("title").map(str::to_string),
            description: input.metadata.text("description").map(str::to_string),
            analyzed_at: chrono::Utc::now().to_rfc3339(),
        },
        score_breakdown: breakdown,
        url,
    })
}
