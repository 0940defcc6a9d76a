use crate::types::scoring::ScoreBreakdown;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

impl Status {
    /// Classifies a score against a check's own pass/warning cutoffs.
    pub fn from_score(score: u8, pass: u8, warning: u8) -> Self {
        if score >= pass {
            Status::Pass
        } else if score >= warning {
            Status::Warning
        } else {
            Status::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warning => "warning",
            Status::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub id: String,
    pub label: String,
    pub status: Status,
    pub score: u8,
    pub details: String,
    pub recommendation: String,
}

/// Loosely-typed key/value bag handed over by the scraper. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata(Map<String, Value>);

impl PageMetadata {
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Ok(Self::default()),
            other => Err(crate::error::AiReadyError::ConfigParse(format!(
                "metadata must be a JSON object, found {other}"
            ))),
        }
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Non-empty string value for `key`, ignoring whitespace-only strings.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// HTTP status reported by the scraper; accepts numbers and numeric strings.
    pub fn status_code(&self) -> Option<u16> {
        match self.0.get("statusCode")? {
            Value::Number(number) => number.as_u64().and_then(|code| u16::try_from(code).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub analyzed_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    pub url: String,
    pub overall_score: u8,
    pub checks: Vec<CheckResult>,
    pub html_content: String,
    pub metadata: ResultMetadata,
    pub score_breakdown: ScoreBreakdown,
}

impl AnalysisResult {
    pub fn check(&self, id: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|check| check.id == id)
    }

    pub fn failing_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks
            .iter()
            .filter(|check| check.status != Status::Pass)
    }
}
