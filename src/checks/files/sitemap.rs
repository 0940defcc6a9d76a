use crate::checks::{CheckInfo, FileCheckContext};
use crate::fetch::Fetcher;
use crate::types::config::Settings;
use crate::types::report::{CheckResult, Status};
use std::time::{Duration, Instant};

pub const INFO: CheckInfo = CheckInfo::new("sitemap", "Sitemap");

/// Whole-scan budget, in multiples of the per-request timeout.
const SCAN_BUDGET_FACTOR: u32 = 4;

const SITEMAP_MARKERS: [&str; 5] = ["<?xml", "<urlset", "<sitemapindex", "<url>", "<sitemap>"];

fn not_found() -> CheckResult {
    INFO.result(
        Status::Fail,
        0,
        "No sitemap.xml found",
        "Generate and submit an XML sitemap",
    )
}

pub fn is_sitemap_content(body: &str) -> bool {
    SITEMAP_MARKERS.iter().any(|marker| body.contains(marker))
        && !body.contains("<!DOCTYPE html")
}

/// Robots.txt URLs in their original order, then the common locations not already listed.
pub fn candidate_urls(base_url: &str, robots_sitemaps: &[String], locations: &[String]) -> Vec<String> {
    let mut candidates = robots_sitemaps.to_vec();
    for path in locations {
        let url = format!("{base_url}{path}");
        if !candidates.contains(&url) {
            candidates.push(url);
        }
    }
    candidates
}

pub fn run(context: &FileCheckContext, fetcher: &dyn Fetcher, settings: &Settings) -> CheckResult {
    run_with_robots_sitemaps(context, fetcher, settings, &[])
}

pub fn run_with_robots_sitemaps(
    context: &FileCheckContext,
    fetcher: &dyn Fetcher,
    settings: &Settings,
    robots_sitemaps: &[String],
) -> CheckResult {
    let candidates = candidate_urls(
        &context.base_url,
        robots_sitemaps,
        &settings.sitemap_locations,
    );
    let budget = Duration::from_millis(settings.timeout_ms) * SCAN_BUDGET_FACTOR;
    let started = Instant::now();

    for url in &candidates {
        if started.elapsed() >= budget {
            tracing::warn!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "sitemap scan budget exhausted, skipping remaining candidates"
            );
            break;
        }

        let response = match fetcher.get(url) {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%url, error = %err, "sitemap candidate unreachable");
                continue;
            }
        };
        if !response.is_ok() || !is_sitemap_content(&response.body) {
            tracing::debug!(%url, status = response.status, "sitemap candidate rejected");
            continue;
        }

        let details = if robots_sitemaps.contains(url) {
            "Valid XML sitemap found (referenced in robots.txt)".to_string()
        } else {
            let path = url.strip_prefix(context.base_url.as_str()).unwrap_or(url.as_str());
            format!("Valid XML sitemap found at {path}")
        };
        return INFO.result(Status::Pass, 100, details, "Sitemap is properly configured");
    }

    not_found()
}
