use crate::error::{AiReadyError, Result};
use crate::types::config::{Settings, DOCUMENTATION_MARKERS};
use url::Url;

/// Prefixes `https://` unless the input already carries an http(s) scheme.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

pub fn parse_url(input: &str) -> Result<Url> {
    let normalized = normalize_url(input.trim());
    let parsed =
        Url::parse(&normalized).map_err(|e| AiReadyError::InvalidUrl(format!("{input}: {e}")))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AiReadyError::InvalidUrl(format!("{input}: missing host")));
    }
    Ok(parsed)
}

/// Scheme and host (plus non-default port) without path, query or fragment.
pub fn base_url(input: &str) -> Result<String> {
    Ok(parse_url(input)?.origin().ascii_serialization())
}

/// Lowercased host name of the subject URL.
pub fn hostname(input: &str) -> Result<String> {
    let parsed = parse_url(input)?;
    Ok(parsed
        .host_str()
        .map(str::to_lowercase)
        .unwrap_or_default())
}

/// Bonus for documentation sites and curated domains. First match wins:
/// documentation marker, then top tier, then second tier.
pub fn domain_reputation_bonus(domain: &str, settings: &Settings) -> i32 {
    let lowered = domain.trim().to_lowercase();
    let domain = lowered.strip_prefix("www.").unwrap_or(&lowered);

    if DOCUMENTATION_MARKERS
        .iter()
        .any(|marker| domain.contains(marker))
    {
        return settings.bonus.documentation_site;
    }
    if matches_any(domain, &settings.top_tier_domains) {
        return settings.bonus.top_tier_domain;
    }
    if matches_any(domain, &settings.second_tier_domains) {
        return settings.bonus.second_tier_domain;
    }
    0
}

fn matches_any(domain: &str, list: &[String]) -> bool {
    list.iter().any(|entry| {
        domain == entry.as_str()
            || domain
                .strip_suffix(entry.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_https_only_when_scheme_missing() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com/a?b=c"), "https://example.com/a?b=c");
    }

    #[test]
    fn base_url_drops_path_query_and_fragment() {
        assert_eq!(
            base_url("https://example.com/docs/page?q=1#top").expect("valid url"),
            "https://example.com"
        );
        assert_eq!(base_url("example.com/about").expect("valid url"), "https://example.com");
        assert_eq!(
            base_url("http://localhost:8080/x").expect("valid url"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn base_url_rejects_malformed_input() {
        assert!(matches!(base_url("exa mple.com"), Err(AiReadyError::InvalidUrl(_))));
        assert!(matches!(base_url("https://"), Err(AiReadyError::InvalidUrl(_))));
    }

    #[test]
    fn hostname_is_lowercased() {
        assert_eq!(hostname("https://Docs.Stripe.COM/api").expect("valid url"), "docs.stripe.com");
    }

    #[test]
    fn reputation_prefers_documentation_over_tiers() {
        let settings = Settings::default();
        assert_eq!(domain_reputation_bonus("docs.stripe.com", &settings), 20);
        assert_eq!(domain_reputation_bonus("developer.apple.com", &settings), 20);
        assert_eq!(domain_reputation_bonus("api.example.com", &settings), 20);
        assert_eq!(domain_reputation_bonus("stripe.com", &settings), 18);
        assert_eq!(domain_reputation_bonus("www.github.com", &settings), 18);
        assert_eq!(domain_reputation_bonus("blog.vercel.com", &settings), 18);
        assert_eq!(domain_reputation_bonus("app.netlify.com", &settings), 12);
        assert_eq!(domain_reputation_bonus("example.com", &settings), 0);
    }

    #[test]
    fn reputation_requires_label_boundary() {
        let settings = Settings::default();
        assert_eq!(domain_reputation_bonus("notstripe.com", &settings), 0);
        assert_eq!(domain_reputation_bonus("stripe.com.evil.net", &settings), 0);
    }
}
