use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::types::report::{CheckResult, Status};
use regex::Regex;
use std::sync::LazyLock;

pub const CHECK: HtmlCheck = HtmlCheck::new("accessibility", "Accessibility", run);

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("IMG_TAG regex"));
static ALT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\salt\s*=").expect("ALT_ATTR regex"));
static LANG_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\blang\s*=\s*["']?[a-z]"#).expect("LANG_ATTR regex"));

/// Image share of the score when the page has no images at all.
const NO_IMAGE_SCORE: f64 = 40.0;

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let html = context.html;

    let images = IMG_TAG.find_iter(html).collect::<Vec<_>>();
    let with_alt = images
        .iter()
        .filter(|tag| ALT_ATTR.is_match(tag.as_str()))
        .count();
    let alt_ratio = if images.is_empty() {
        100.0
    } else {
        with_alt as f64 / images.len() as f64 * 100.0
    };

    let has_aria_label = html.contains("aria-label");
    let has_aria_describedby = html.contains("aria-describedby");
    let has_role = html.contains(r#"role=""#);
    let has_lang = LANG_ATTR.is_match(html);

    let image_score = if images.is_empty() {
        NO_IMAGE_SCORE
    } else {
        alt_ratio * 0.4
    };
    let raw = image_score
        + if has_aria_label { 20.0 } else { 0.0 }
        + if has_aria_describedby { 10.0 } else { 0.0 }
        + if has_role { 15.0 } else { 0.0 }
        + if has_lang { 15.0 } else { 0.0 };
    let score = raw.min(100.0).round() as u8;

    let details = format!(
        "{}% images have alt text ({} of {}), ARIA labels: {}, lang attribute: {}",
        alt_ratio.round(),
        with_alt,
        images.len(),
        if has_aria_label { "Yes" } else { "No" },
        if has_lang { "Yes" } else { "No" },
    );
    let recommendation = if score < 80 {
        "Add alt text to all images and use ARIA labels for interactive elements"
    } else {
        "Good accessibility implementation"
    };

    info.result(Status::from_score(score, 80, 50), score, details, recommendation)
}
