use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::types::report::{CheckResult, Status};
use regex::Regex;
use std::sync::LazyLock;

pub const CHECK: HtmlCheck = HtmlCheck::new("heading-structure", "Heading Hierarchy", run);

static HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])[^>]*>").expect("HEADING_OPEN regex"));

fn heading_levels(html: &str) -> Vec<u8> {
    HEADING_OPEN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|level| level.as_str().parse().ok())
        .collect()
}

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let levels = heading_levels(context.html);
    let h1_count = levels.iter().filter(|level| **level == 1).count();

    let mut score: i32 = 100;
    let mut issues = Vec::new();

    if h1_count == 0 {
        score -= 40;
        issues.push("No H1 found".to_string());
    } else if h1_count > 1 {
        score -= 30;
        issues.push(format!("Multiple H1s ({h1_count}) create topic ambiguity"));
    }

    for pair in levels.windows(2) {
        if pair[1] > pair[0] + 1 {
            score -= 15;
            issues.push(format!("Skipped heading level (H{} -> H{})", pair[0], pair[1]));
        }
    }

    let score = score.clamp(0, 100) as u8;
    let details = if issues.is_empty() {
        format!("Perfect hierarchy with {h1_count} H1 and logical structure")
    } else {
        issues.join(", ")
    };
    let recommendation = if score < 80 {
        "Use exactly one H1 and maintain logical heading hierarchy (H1 -> H2 -> H3)"
    } else {
        "Excellent heading structure for AI comprehension"
    };

    info.result(Status::from_score(score, 80, 50), score, details, recommendation)
}
