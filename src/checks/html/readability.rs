use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::text::calculate_readability;
use crate::types::report::{CheckResult, Status};

pub const CHECK: HtmlCheck = HtmlCheck::new("readability", "Content Readability", run);

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let flesch = calculate_readability(&context.text_content);
    let rounded = flesch.round();

    let (score, status, details) = if flesch >= 70.0 {
        (100, Status::Pass, format!("Very readable (Flesch: {rounded})"))
    } else if flesch >= 50.0 {
        (80, Status::Pass, format!("Good readability (Flesch: {rounded})"))
    } else if flesch >= 30.0 {
        (50, Status::Warning, format!("Difficult to read (Flesch: {rounded})"))
    } else {
        (20, Status::Fail, format!("Very difficult (Flesch: {rounded})"))
    };

    let recommendation = if score < 80 {
        "Simplify sentences and use clearer language for better AI comprehension"
    } else {
        "Content is clearly written and AI-friendly"
    };

    info.result(status, score, details, recommendation)
}
