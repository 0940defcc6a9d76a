pub mod files;
pub mod html;

use crate::fetch::Fetcher;
use crate::text::extract_text_content;
use crate::types::config::Settings;
use crate::types::report::{CheckResult, PageMetadata, Status};
use std::thread;

/// Read-only inputs shared by every HTML check of one analysis.
#[derive(Debug, Clone)]
pub struct CheckContext<'a> {
    pub html: &'a str,
    pub metadata: &'a PageMetadata,
    pub url: &'a str,
    pub text_content: String,
}

impl<'a> CheckContext<'a> {
    pub fn new(html: &'a str, metadata: &'a PageMetadata, url: &'a str) -> Self {
        Self {
            html,
            metadata,
            url,
            text_content: extract_text_content(html),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheckContext {
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInfo {
    pub id: &'static str,
    pub label: &'static str,
}

impl CheckInfo {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    pub fn result(
        &self,
        status: Status,
        score: u8,
        details: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> CheckResult {
        CheckResult {
            id: self.id.to_string(),
            label: self.label.to_string(),
            status,
            score: score.min(100),
            details: details.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// A pure rule over the fetched document.
pub struct HtmlCheck {
    pub info: CheckInfo,
    evaluate: fn(&CheckInfo, &CheckContext<'_>) -> CheckResult,
}

impl HtmlCheck {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        evaluate: fn(&CheckInfo, &CheckContext<'_>) -> CheckResult,
    ) -> Self {
        Self {
            info: CheckInfo::new(id, label),
            evaluate,
        }
    }

    pub fn run(&self, context: &CheckContext<'_>) -> CheckResult {
        (self.evaluate)(&self.info, context)
    }
}

/// HTML checks in report order.
pub static HTML_CHECKS: [HtmlCheck; 7] = [
    html::heading_structure::CHECK,
    html::readability::CHECK,
    html::metadata::CHECK,
    html::semantic_html::CHECK,
    html::accessibility::CHECK,
    html::structured_data::CHECK,
    html::anti_bot::CHECK,
];

/// File checks in report order.
pub const FILE_CHECKS: [CheckInfo; 3] = [files::llms::INFO, files::robots::INFO, files::sitemap::INFO];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    File,
    Html,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::File => "file",
            CheckKind::Html => "html",
        }
    }
}

pub fn registry() -> Vec<(CheckInfo, CheckKind)> {
    FILE_CHECKS
        .iter()
        .map(|info| (*info, CheckKind::File))
        .chain(HTML_CHECKS.iter().map(|check| (check.info, CheckKind::Html)))
        .collect()
}

pub fn run_html_checks(context: &CheckContext<'_>) -> Vec<CheckResult> {
    HTML_CHECKS.iter().map(|check| check.run(context)).collect()
}

#[derive(Debug, Clone)]
pub struct FileCheckResults {
    pub llms: CheckResult,
    pub robots: CheckResult,
    pub sitemap: CheckResult,
}

impl FileCheckResults {
    pub fn into_vec(self) -> Vec<CheckResult> {
        vec![self.llms, self.robots, self.sitemap]
    }
}

/// llms.txt runs alongside the robots.txt -> sitemap chain; sitemap waits for robots.
pub fn run_file_checks(
    context: &FileCheckContext,
    fetcher: &dyn Fetcher,
    settings: &Settings,
) -> FileCheckResults {
    thread::scope(|scope| {
        let llms = scope.spawn(|| files::llms::run(context, fetcher, settings));

        let robots = files::robots::run(context, fetcher);
        let sitemap =
            files::sitemap::run_with_robots_sitemaps(context, fetcher, settings, &robots.sitemap_urls);

        let llms = llms
            .join()
            .unwrap_or_else(|_| files::llms::not_found());

        FileCheckResults {
            llms,
            robots: robots.result,
            sitemap,
        }
    })
}
