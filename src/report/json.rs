use crate::types::report::AnalysisResult;
use serde_json::json;

pub fn to_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Explicit failure payload for fatal errors.
pub fn error_json(message: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "success": false,
        "error": message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{CheckResult, ResultMetadata, Status};
    use crate::types::scoring::ScoreBreakdown;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            success: true,
            url: "https://example.com".to_string(),
            overall_score: 72,
            checks: vec![CheckResult {
                id: "robots-txt".to_string(),
                label: "Robots.txt".to_string(),
                status: Status::Warning,
                score: 60,
                details: "Robots.txt found".to_string(),
                recommendation: "Add sitemap reference to robots.txt".to_string(),
            }],
            html_content: "<html></html>".to_string(),
            metadata: ResultMetadata {
                title: Some("Home".to_string()),
                description: None,
                analyzed_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            score_breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn json_report_uses_camel_case_keys() {
        let rendered = to_json(&sample()).expect("json should serialize");
        assert!(rendered.contains("\"overallScore\": 72"));
        assert!(rendered.contains("\"htmlContent\""));
        assert!(rendered.contains("\"analyzedAt\""));
        assert!(rendered.contains("\"status\": \"warning\""));
        assert!(rendered.contains("\"scoreBreakdown\""));
        assert!(!rendered.contains("\"description\""));
    }

    #[test]
    fn error_payload_marks_failure() {
        let rendered = error_json("invalid url: nope").expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "invalid url: nope");
    }
}
