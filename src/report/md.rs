use crate::types::report::AnalysisResult;

pub fn to_markdown(result: &AnalysisResult) -> String {
    let mut output = String::new();
    output.push_str("# AI Readiness Report\n\n");
    output.push_str(&format!("URL: {}\n\n", result.url));
    if let Some(title) = &result.metadata.title {
        output.push_str(&format!("Title: {title}\n\n"));
    }
    output.push_str(&format!("Overall score: {}/100\n\n", result.overall_score));

    let breakdown = &result.score_breakdown;
    output.push_str("## Score Breakdown\n\n");
    output.push_str(&format!(
        "- weighted base: {}\n- content signals: {} (+{})\n- minimum floor applied: {}\n- domain reputation: +{}\n\n",
        breakdown.weighted_base,
        breakdown.content_signals,
        breakdown.content_bonus,
        if breakdown.floor_applied { "yes" } else { "no" },
        breakdown.reputation_bonus
    ));

    output.push_str("## Checks\n\n");
    for check in &result.checks {
        output.push_str(&format!(
            "- [{}] {} ({}): {} - {}\n",
            check.status.as_str(),
            check.label,
            check.id,
            check.score,
            check.details
        ));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    let mut failing = result.failing_checks().peekable();
    if failing.peek().is_none() {
        output.push_str("- none\n");
    } else {
        for check in failing {
            output.push_str(&format!("- {}: {}\n", check.label, check.recommendation));
        }
    }

    output.push_str(&format!("\nAnalyzed at {}\n", result.metadata.analyzed_at));
    output
}
