use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::types::report::{CheckResult, Status};
use regex::Regex;
use std::sync::LazyLock;

pub const CHECK: HtmlCheck = HtmlCheck::new("meta-tags", "Metadata Quality", run);

static META_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta\s[^>]*?(?:name|property)\s*=\s*["'](?:og:)?description["'][^>]*>"#,
    )
    .expect("META_DESCRIPTION regex")
});
static CONTENT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("CONTENT_ATTR regex")
});

const GOOD_DESCRIPTION_CHARS: std::ops::RangeInclusive<usize> = 70..=160;

/// Description text from the scraper, falling back to the first description meta tag.
fn description_text(context: &CheckContext<'_>) -> Option<String> {
    let metadata = context.metadata;
    if let Some(text) = metadata
        .text("description")
        .or_else(|| metadata.text("ogDescription"))
    {
        return Some(text.to_string());
    }
    META_DESCRIPTION
        .find_iter(context.html)
        .filter_map(|tag| CONTENT_ATTR.captures(tag.as_str()))
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|content| content.as_str().trim().to_string())
        .find(|content| !content.is_empty())
}

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let html = context.html;
    let metadata = context.metadata;

    let has_rich_title = metadata.text("ogTitle").is_some()
        || metadata.text("title").is_some()
        || html.contains("og:title");
    let has_bare_title = html.contains("<title");

    let has_description = metadata.text("ogDescription").is_some()
        || metadata.text("description").is_some()
        || html.contains("og:description")
        || html.contains(r#"name="description""#);
    let description_chars = description_text(context)
        .map(|text| text.chars().count())
        .unwrap_or(0);

    let has_author =
        html.contains(r#"name="author""#) || html.contains(r#"property="article:author""#);
    let has_publish_date = html.contains(r#"property="article:published_time""#)
        || html.contains(r#"property="article:modified_time""#);

    let mut score: u8 = 30;
    let mut found = Vec::new();

    if has_rich_title {
        score += 30;
        found.push("Title");
    } else if has_bare_title {
        score += 20;
        found.push("Basic title");
    }

    if has_description {
        score += 25;
        if GOOD_DESCRIPTION_CHARS.contains(&description_chars) {
            score += 10;
            found.push("Description (good length)");
        } else {
            found.push("Description");
        }
    }

    if has_author {
        score += 10;
        found.push("Author");
    }
    if has_publish_date {
        score += 10;
        found.push("Date");
    }

    let score = score.min(100);
    let details = if found.is_empty() {
        "Missing critical metadata".to_string()
    } else {
        found.join(", ")
    };
    let recommendation = if score < 70 {
        "Add title, description (70-160 chars), author, and publish date metadata"
    } else {
        "Metadata provides excellent context for AI"
    };

    info.result(Status::from_score(score, 70, 40), score, details, recommendation)
}
