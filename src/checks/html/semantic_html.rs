use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::types::report::{CheckResult, Status};

pub const CHECK: HtmlCheck = HtmlCheck::new("semantic-html", "Semantic HTML", run);

const SEMANTIC_TAGS: [&str; 7] = [
    "<article", "<nav", "<main", "<section", "<header", "<footer", "<aside",
];

/// Markers of client-rendered apps, which often rely on ARIA roles instead of landmarks.
const FRAMEWORK_MARKERS: [&str; 5] = ["__next", "_app", "react", "vue", "svelte"];

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let html = context.html;

    let found = SEMANTIC_TAGS
        .iter()
        .filter(|tag| html.contains(*tag))
        .map(|tag| tag.trim_start_matches('<'))
        .collect::<Vec<_>>();
    let has_aria = html.contains(r#"role=""#) || html.contains("aria-");
    let is_framework = FRAMEWORK_MARKERS.iter().any(|marker| html.contains(marker));

    // Five landmarks already earn the full structural share.
    let structural = found.len() as u32 * 60 / 5;
    let score = (structural + if has_aria { 20 } else { 0 } + if is_framework { 20 } else { 0 })
        .min(100) as u8;

    let mut details = format!("Found {} semantic HTML5 elements", found.len());
    if !found.is_empty() {
        details.push_str(&format!(" ({})", found.join(", ")));
    }
    if has_aria {
        details.push_str(", ARIA roles present");
    }
    if is_framework {
        details.push_str(", framework markup detected");
    }

    let recommendation = if score < 80 {
        "Use more semantic HTML5 elements (article, nav, main, section, etc.)"
    } else {
        "Excellent use of semantic HTML"
    };

    info.result(Status::from_score(score, 80, 40), score, details, recommendation)
}
