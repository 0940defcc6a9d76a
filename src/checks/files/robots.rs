use crate::checks::{CheckInfo, FileCheckContext};
use crate::fetch::Fetcher;
use crate::types::report::{CheckResult, Status};
use regex::Regex;
use std::sync::LazyLock;

pub const INFO: CheckInfo = CheckInfo::new("robots-txt", "Robots.txt");

static SITEMAP_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)sitemap:[ \t]*(\S.*)$").expect("SITEMAP_DIRECTIVE regex")
});

/// robots.txt verdict plus the sitemap URLs it advertises.
#[derive(Debug, Clone)]
pub struct RobotsOutcome {
    pub result: CheckResult,
    pub sitemap_urls: Vec<String>,
}

fn not_found() -> RobotsOutcome {
    RobotsOutcome {
        result: INFO.result(
            Status::Fail,
            0,
            "No robots.txt file found",
            "Create a robots.txt file with AI crawler directives",
        ),
        sitemap_urls: Vec::new(),
    }
}

pub fn extract_sitemap_urls(robots: &str) -> Vec<String> {
    SITEMAP_DIRECTIVE
        .captures_iter(robots)
        .filter_map(|caps| caps.get(1))
        .map(|url| url.as_str().trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

pub fn run(context: &FileCheckContext, fetcher: &dyn Fetcher) -> RobotsOutcome {
    let url = format!("{}/robots.txt", context.base_url);
    let response = match fetcher.get(&url) {
        Ok(response) if response.is_ok() => response,
        Ok(response) => {
            tracing::debug!(%url, status = response.status, "robots.txt not available");
            return not_found();
        }
        Err(err) => {
            tracing::warn!(%url, error = %err, "robots.txt fetch failed");
            return not_found();
        }
    };

    let has_user_agent = response.body.to_lowercase().contains("user-agent");
    let sitemap_urls = extract_sitemap_urls(&response.body);
    let has_sitemap = !sitemap_urls.is_empty();

    let score: u8 = (if has_user_agent { 60 } else { 0 }) + (if has_sitemap { 40 } else { 0 });
    let details = if has_sitemap {
        format!(
            "Robots.txt found with {} sitemap reference(s)",
            sitemap_urls.len()
        )
    } else {
        "Robots.txt found".to_string()
    };
    let recommendation = if score < 80 {
        "Add sitemap reference to robots.txt"
    } else {
        "Robots.txt properly configured"
    };

    RobotsOutcome {
        result: INFO.result(Status::from_score(score, 80, 40), score, details, recommendation),
        sitemap_urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::FakeFetcher;

    fn context() -> FileCheckContext {
        FileCheckContext {
            base_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn user_agent_and_sitemap_score_full_marks() {
        let fetcher = FakeFetcher::new().with(
            "https://example.com/robots.txt",
            200,
            "User-agent: *\nSitemap: https://example.com/sitemap.xml",
        );
        let outcome = run(&context(), &fetcher);
        assert_eq!(outcome.result.score, 100);
        assert_eq!(outcome.result.status, Status::Pass);
        assert_eq!(outcome.sitemap_urls, vec!["https://example.com/sitemap.xml"]);
        assert_eq!(
            outcome.result.details,
            "Robots.txt found with 1 sitemap reference(s)"
        );
    }

    #[test]
    fn user_agent_without_sitemap_warns() {
        let fetcher = FakeFetcher::new().with(
            "https://example.com/robots.txt",
            200,
            "USER-AGENT: GPTBot\nDisallow: /private",
        );
        let outcome = run(&context(), &fetcher);
        assert_eq!(outcome.result.score, 60);
        assert_eq!(outcome.result.status, Status::Warning);
        assert!(outcome.sitemap_urls.is_empty());
    }

    #[test]
    fn sitemap_without_user_agent_warns() {
        let fetcher = FakeFetcher::new().with(
            "https://example.com/robots.txt",
            200,
            "Sitemap: https://example.com/sitemap.xml\nDisallow: /admin",
        );
        let outcome = run(&context(), &fetcher);
        assert_eq!(outcome.result.score, 40);
        assert_eq!(outcome.result.status, Status::Warning);
        assert_eq!(outcome.sitemap_urls, vec!["https://example.com/sitemap.xml"]);
        assert_eq!(outcome.result.recommendation, "Add sitemap reference to robots.txt");
    }

    #[test]
    fn sitemap_directives_are_case_insensitive_and_ordered() {
        let urls = extract_sitemap_urls(
            "sitemap: https://a.example/one.xml\r\nUser-agent: *\nSITEMAP:https://a.example/two.xml  \n",
        );
        assert_eq!(
            urls,
            vec!["https://a.example/one.xml", "https://a.example/two.xml"]
        );
    }

    #[test]
    fn missing_or_unreachable_file_fails() {
        let outcome = run(&context(), &FakeFetcher::new());
        assert_eq!(outcome.result.score, 0);
        assert_eq!(outcome.result.status, Status::Fail);

        let fetcher = FakeFetcher::new().failing("https://example.com/robots.txt");
        let outcome = run(&context(), &fetcher);
        assert_eq!(outcome.result.details, "No robots.txt file found");
        assert!(outcome.sitemap_urls.is_empty());
    }
}
