use crate::checks::{CheckContext, CheckInfo, HtmlCheck};
use crate::types::report::{CheckResult, Status};
use regex::Regex;
use std::sync::LazyLock;

pub const CHECK: HtmlCheck = HtmlCheck::new("anti-bot", "Anti-Bot Detection", run);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Severity {
    None,
    Light,
    Moderate,
    Aggressive,
}

impl Severity {
    /// Inverse score: the less protection, the more readable for crawlers.
    fn score(self) -> u8 {
        match self {
            Severity::None => 100,
            Severity::Light => 80,
            Severity::Moderate => 50,
            Severity::Aggressive => 20,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Severity::None => "No anti-bot measures detected",
            Severity::Light => "Light protection",
            Severity::Moderate => "Moderate protection",
            Severity::Aggressive => "Aggressive protection",
        }
    }
}

struct Signature {
    pattern: Regex,
    name: &'static str,
    severity: Severity,
}

const SIGNATURES: [(&str, &str, Severity); 17] = [
    // CAPTCHA
    (r"(?i)recaptcha", "reCAPTCHA", Severity::Moderate),
    (r"(?i)hcaptcha", "hCaptcha", Severity::Moderate),
    (r"(?i)turnstile", "Cloudflare Turnstile", Severity::Light),
    (r"(?i)captcha", "Generic CAPTCHA", Severity::Moderate),
    // bot management
    (r"(?i)cloudflare.*challenge", "Cloudflare Challenge", Severity::Aggressive),
    (r"(?i)__cf_bm|cf-ray|cf_clearance", "Cloudflare Bot Management", Severity::Moderate),
    (r"(?i)akamai.*bot", "Akamai Bot Manager", Severity::Aggressive),
    (r"(?i)perimeterx|_pxhd|_pxvid", "PerimeterX", Severity::Aggressive),
    (r"(?i)datadome", "DataDome", Severity::Aggressive),
    (r"(?i)imperva|incapsula", "Imperva/Incapsula", Severity::Aggressive),
    (r"(?i)kasada", "Kasada", Severity::Aggressive),
    (r"(?i)shape.*security", "Shape Security", Severity::Aggressive),
    // fingerprinting
    (r"(?i)fingerprintjs|fpjs", "FingerprintJS", Severity::Moderate),
    (r"(?i)canvas.*fingerprint", "Canvas Fingerprinting", Severity::Light),
    (r"(?i)webgl.*fingerprint", "WebGL Fingerprinting", Severity::Light),
    // honeypots
    (
        r#"(?i)<input[^>]*type=["']?hidden["']?[^>]*name=["']?(hp_|honeypot|trap)"#,
        "Honeypot Field",
        Severity::Light,
    ),
    (r"(?i)display:\s*none[^}]*<input", "Hidden Input Trap", Severity::Light),
];

static COMPILED: LazyLock<Vec<Signature>> = LazyLock::new(|| {
    SIGNATURES
        .iter()
        .map(|(pattern, name, severity)| Signature {
            pattern: Regex::new(pattern).expect("anti-bot signature regex"),
            name: *name,
            severity: *severity,
        })
        .collect()
});

static CHALLENGE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<title[^>]*>.*?(verify|challenge|blocked|security check)")
        .expect("CHALLENGE_TITLE regex")
});

fn detect(context: &CheckContext<'_>) -> (Vec<String>, Severity) {
    let html = context.html;
    let mut detected: Vec<String> = Vec::new();
    let mut severity = Severity::None;

    for signature in COMPILED.iter() {
        if signature.pattern.is_match(html) && !detected.iter().any(|name| name == signature.name)
        {
            detected.push(signature.name.to_string());
            severity = severity.max(signature.severity);
        }
    }

    match context.metadata.status_code() {
        Some(429) => {
            detected.push("Rate Limited (429)".to_string());
            severity = severity.max(Severity::Aggressive);
        }
        Some(403) => {
            detected.push("Access Forbidden (403)".to_string());
            severity = severity.max(Severity::Moderate);
        }
        _ => {}
    }

    if CHALLENGE_TITLE.is_match(html) {
        detected.push("Challenge Page".to_string());
        severity = severity.max(Severity::Aggressive);
    }

    (detected, severity)
}

fn run(info: &CheckInfo, context: &CheckContext<'_>) -> CheckResult {
    let (detected, severity) = detect(context);

    let status = match severity {
        Severity::None | Severity::Light => Status::Pass,
        Severity::Moderate | Severity::Aggressive => Status::Warning,
    };
    let details = if detected.is_empty() {
        severity.label().to_string()
    } else {
        format!("{}: {}", severity.label(), detected.join(", "))
    };
    let recommendation = match severity {
        Severity::Aggressive => "Aggressive anti-bot measures may block AI crawlers",
        Severity::Moderate => "Some anti-bot measures present - AI access may be limited",
        Severity::None | Severity::Light => "Site is accessible to AI crawlers",
    };

    if severity >= Severity::Moderate {
        tracing::info!(url = context.url, ?severity, "anti-bot protection detected");
    }

    info.result(status, severity.score(), details, recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::PageMetadata;

    fn evaluate(html: &str, metadata: &PageMetadata) -> CheckResult {
        CHECK.run(&CheckContext::new(html, metadata, "https://example.com"))
    }

    #[test]
    fn clean_page_is_fully_accessible() {
        let result = evaluate("<html><title>Home</title><p>Welcome</p></html>", &PageMetadata::default());
        assert_eq!(result.score, 100);
        assert_eq!(result.status, Status::Pass);
        assert_eq!(result.details, "No anti-bot measures detected");
    }

    #[test]
    fn light_protection_still_passes() {
        let result = evaluate(
            r#"<script src="https://challenges.cloudflare.com/turnstile/v0/api.js"></script>"#,
            &PageMetadata::default(),
        );
        assert_eq!(result.score, 80);
        assert_eq!(result.status, Status::Pass);
        assert!(result.details.contains("Cloudflare Turnstile"));
    }

    #[test]
    fn highest_severity_wins() {
        let result = evaluate(
            r#"<script src="https://www.google.com/recaptcha/api.js"></script><script src="https://js.datadome.co/tags.js"></script>"#,
            &PageMetadata::default(),
        );
        assert_eq!(result.score, 20);
        assert_eq!(result.status, Status::Warning);
        assert!(result.details.starts_with("Aggressive protection: reCAPTCHA"));
        assert!(result.details.contains("DataDome"));
    }

    #[test]
    fn status_code_hints_raise_severity() {
        let mut metadata = PageMetadata::default();
        metadata.insert("statusCode", 403);
        let result = evaluate("<p>nothing here</p>", &metadata);
        assert_eq!(result.score, 50);
        assert!(result.details.contains("Access Forbidden (403)"));

        metadata.insert("statusCode", 429);
        let result = evaluate("<p>nothing here</p>", &metadata);
        assert_eq!(result.score, 20);
        assert!(result.details.contains("Rate Limited (429)"));
    }

    #[test]
    fn challenge_title_is_aggressive() {
        let result = evaluate(
            "<html><head><title>Just a moment... Security Check</title></head></html>",
            &PageMetadata::default(),
        );
        assert_eq!(result.score, 20);
        assert!(result.details.contains("Challenge Page"));
    }
}
