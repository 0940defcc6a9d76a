use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::types::report::{CheckResult, Status};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub const CHECK: HtmlCheck = HtmlCheck::new("structured-data", "Structured Data", run);

static JSON_LD_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type=["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("JSON_LD_BLOCK regex")
});
static ITEMTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)itemtype=["']([^"']+)["']"#).expect("ITEMTYPE regex")
});
static RDFA_VOCAB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\svocab=["'][^"']*schema\.org[^"']*["']"#).expect("RDFA_VOCAB regex")
});
static RDFA_TYPEOF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\stypeof=["'][^"']+["']"#).expect("RDFA_TYPEOF regex"));

/// Schema types shown in the details before the rest is summarised.
const SHOWN_TYPES: usize = 5;

#[derive(Debug, Default)]
struct Findings {
    json_ld_blocks: usize,
    microdata_items: usize,
    rdfa_markers: usize,
    types: Vec<String>,
}

impl Findings {
    fn add_type(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.types.iter().any(|known| known == name) {
            self.types.push(name.to_string());
        }
    }

    fn total(&self) -> usize {
        self.json_ld_blocks + self.microdata_items + self.rdfa_markers
    }
}

fn collect_json_ld_types(value: &Value, findings: &mut Findings) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_json_ld_types(item, findings);
            }
        }
        Value::Object(object) => {
            match object.get("@type") {
                Some(Value::String(name)) => findings.add_type(name),
                Some(Value::Array(names)) => {
                    for name in names.iter().filter_map(Value::as_str) {
                        findings.add_type(name);
                    }
                }
                _ => {}
            }
            if let Some(graph) = object.get("@graph") {
                collect_json_ld_types(graph, findings);
            }
        }
        _ => {}
    }
}

fn analyze(html: &str) -> Findings {
    let mut findings = Findings::default();

    for caps in JSON_LD_BLOCK.captures_iter(html) {
        findings.json_ld_blocks += 1;
        let Some(body) = caps.get(1) else { continue };
        match serde_json::from_str::<Value>(body.as_str()) {
            Ok(value) => collect_json_ld_types(&value, &mut findings),
            Err(err) => tracing::debug!(error = %err, "skipping malformed JSON-LD block"),
        }
    }

    for caps in ITEMTYPE.captures_iter(html) {
        findings.microdata_items += 1;
        // https://schema.org/Article -> Article
        if let Some(name) = caps.get(1).and_then(|url| url.as_str().rsplit('/').next()) {
            findings.add_type(name);
        }
    }

    let vocab = RDFA_VOCAB.find_iter(html).count();
    let has_typeof = RDFA_TYPEOF.is_match(html);
    findings.rdfa_markers = vocab.max(usize::from(has_typeof));

    findings
}

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let findings = analyze(context.html);

    let mut score: u8 = 0;
    let mut parts = Vec::new();
    if findings.json_ld_blocks > 0 {
        score += 50;
        parts.push(format!("JSON-LD ({})", findings.json_ld_blocks));
    }
    if findings.microdata_items > 0 {
        score += 30;
        parts.push(format!("Microdata ({})", findings.microdata_items));
    }
    if findings.rdfa_markers > 0 {
        score += 20;
        parts.push("RDFa".to_string());
    }
    match findings.types.len() {
        0 => {}
        1 | 2 => score += 10,
        _ => score += 20,
    }
    let score = score.min(100);

    let details = if findings.total() == 0 {
        "No structured data found".to_string()
    } else {
        let mut details = parts.join(", ");
        if !findings.types.is_empty() {
            let shown = findings
                .types
                .iter()
                .take(SHOWN_TYPES)
                .cloned()
                .collect::<Vec<_>>();
            details.push_str(&format!(" - Types: {}", shown.join(", ")));
            if findings.types.len() > SHOWN_TYPES {
                details.push_str(&format!(" +{} more", findings.types.len() - SHOWN_TYPES));
            }
        }
        details
    };

    let recommendation = if findings.total() == 0 {
        "Add JSON-LD structured data to help AI understand your content"
    } else if score < 80 {
        "Consider adding more schema types for richer AI comprehension"
    } else {
        "Excellent structured data implementation"
    };

    info.result(Status::from_score(score, 80, 40), score, details, recommendation)
}
