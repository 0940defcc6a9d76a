use crate::error::AiReadyError;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_USER_AGENT: &str = concat!("ai-ready/", env!("CARGO_PKG_VERSION"));

/// Per-check weights used by the weighted mean. Checks missing here weigh 1.0.
pub const DEFAULT_WEIGHTS: [(&str, f64); 10] = [
    ("readability", 1.5),
    ("heading-structure", 1.4),
    ("meta-tags", 1.2),
    ("robots-txt", 0.9),
    ("sitemap", 0.8),
    ("llms-txt", 0.3),
    ("semantic-html", 1.0),
    ("accessibility", 0.9),
    ("structured-data", 1.0),
    ("anti-bot", 0.5),
];

pub const TOP_TIER_DOMAINS: [&str; 14] = [
    "vercel.com",
    "stripe.com",
    "github.com",
    "openai.com",
    "anthropic.com",
    "google.com",
    "microsoft.com",
    "apple.com",
    "aws.amazon.com",
    "cloud.google.com",
    "azure.microsoft.com",
    "react.dev",
    "nextjs.org",
    "tailwindcss.com",
];

pub const SECOND_TIER_DOMAINS: [&str; 9] = [
    "netlify.com",
    "heroku.com",
    "digitalocean.com",
    "cloudflare.com",
    "twilio.com",
    "slack.com",
    "notion.so",
    "linear.app",
    "figma.com",
];

/// Host substrings that mark a documentation site.
pub const DOCUMENTATION_MARKERS: [&str; 3] = ["docs.", "developer.", "api."];

pub const COMMON_SITEMAP_LOCATIONS: [&str; 5] = [
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap-index.xml",
    "/sitemaps/sitemap.xml",
    "/sitemap/sitemap.xml",
];

pub const LLMS_TXT_VARIANTS: [&str; 3] = ["llms.txt", "LLMs.txt", "llms-full.txt"];

pub const CONTENT_SIGNAL_IDS: [&str; 3] = ["readability", "heading-structure", "meta-tags"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub content_signal: u8,
    pub minimum_viable: u8,
    pub excellent: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            content_signal: 60,
            minimum_viable: 35,
            excellent: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusPoints {
    pub documentation_site: i32,
    pub top_tier_domain: i32,
    pub second_tier_domain: i32,
    pub three_content_signals: i32,
    pub two_content_signals: i32,
}

impl Default for BonusPoints {
    fn default() -> Self {
        Self {
            documentation_site: 20,
            top_tier_domain: 18,
            second_tier_domain: 12,
            three_content_signals: 15,
            two_content_signals: 10,
        }
    }
}

/// Resolved, read-only configuration shared by every check and the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub weights: HashMap<String, f64>,
    pub thresholds: Thresholds,
    pub bonus: BonusPoints,
    pub top_tier_domains: Vec<String>,
    pub second_tier_domains: Vec<String>,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub sitemap_locations: Vec<String>,
    pub llms_variants: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS
                .iter()
                .map(|(id, weight)| (id.to_string(), *weight))
                .collect(),
            thresholds: Thresholds::default(),
            bonus: BonusPoints::default(),
            top_tier_domains: to_owned_list(&TOP_TIER_DOMAINS),
            second_tier_domains: to_owned_list(&SECOND_TIER_DOMAINS),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sitemap_locations: to_owned_list(&COMMON_SITEMAP_LOCATIONS),
            llms_variants: to_owned_list(&LLMS_TXT_VARIANTS),
        }
    }
}

impl Settings {
    pub fn weight(&self, check_id: &str) -> f64 {
        self.weights.get(check_id).copied().unwrap_or(1.0)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiReadyConfig {
    pub scoring: Option<ScoringConfig>,
    pub domains: Option<DomainsConfig>,
    pub fetch: Option<FetchConfig>,
    pub files: Option<FilesConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub content_signal_threshold: Option<u8>,
    pub minimum_viable_score: Option<u8>,
    pub excellent_score: Option<u8>,
    pub bonus: Option<BonusConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BonusConfig {
    pub documentation_site: Option<i32>,
    pub top_tier_domain: Option<i32>,
    pub second_tier_domain: Option<i32>,
    pub three_content_signals: Option<i32>,
    pub two_content_signals: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsConfig {
    pub top_tier: Option<Vec<String>>,
    pub second_tier: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchConfig {
    pub timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilesConfig {
    pub sitemap_locations: Option<Vec<String>>,
    pub llms_variants: Option<Vec<String>>,
}

impl AiReadyConfig {
    /// Overlays configured values on the built-in defaults.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scoring) = &self.scoring {
            if let Some(weights) = &scoring.weights {
                for (id, weight) in weights {
                    settings.weights.insert(id.clone(), *weight);
                }
            }
            let thresholds = &mut settings.thresholds;
            thresholds.content_signal = scoring
                .content_signal_threshold
                .unwrap_or(thresholds.content_signal);
            thresholds.minimum_viable = scoring
                .minimum_viable_score
                .unwrap_or(thresholds.minimum_viable);
            thresholds.excellent = scoring.excellent_score.unwrap_or(thresholds.excellent);

            if let Some(bonus) = &scoring.bonus {
                let points = &mut settings.bonus;
                points.documentation_site =
                    bonus.documentation_site.unwrap_or(points.documentation_site);
                points.top_tier_domain = bonus.top_tier_domain.unwrap_or(points.top_tier_domain);
                points.second_tier_domain =
                    bonus.second_tier_domain.unwrap_or(points.second_tier_domain);
                points.three_content_signals = bonus
                    .three_content_signals
                    .unwrap_or(points.three_content_signals);
                points.two_content_signals =
                    bonus.two_content_signals.unwrap_or(points.two_content_signals);
            }
        }

        if let Some(domains) = &self.domains {
            if let Some(top_tier) = &domains.top_tier {
                settings.top_tier_domains = normalize_domains(top_tier);
            }
            if let Some(second_tier) = &domains.second_tier {
                settings.second_tier_domains = normalize_domains(second_tier);
            }
        }

        if let Some(fetch) = &self.fetch {
            settings.timeout_ms = fetch.timeout_ms.unwrap_or(settings.timeout_ms);
            if let Some(user_agent) = &fetch.user_agent {
                settings.user_agent = user_agent.clone();
            }
        }

        if let Some(files) = &self.files {
            if let Some(locations) = &files.sitemap_locations {
                settings.sitemap_locations = locations.clone();
            }
            if let Some(variants) = &files.llms_variants {
                settings.llms_variants = variants.clone();
            }
        }

        settings
    }

    pub fn validate(&self) -> Result<(), AiReadyError> {
        if let Some(scoring) = &self.scoring {
            if let Some(weights) = &scoring.weights {
                let unknown = weights
                    .keys()
                    .filter(|key| !DEFAULT_WEIGHTS.iter().any(|(id, _)| id == key))
                    .cloned()
                    .collect::<Vec<_>>();
                if !unknown.is_empty() {
                    return Err(AiReadyError::ConfigParse(format!(
                        "scoring.weights contains unknown check id(s): {}",
                        unknown.join(", ")
                    )));
                }
                if let Some((id, weight)) = weights
                    .iter()
                    .find(|(_, weight)| !weight.is_finite() || !(0.0..=10.0).contains(*weight))
                {
                    return Err(AiReadyError::ConfigParse(format!(
                        "scoring.weights.{id} must be between 0.0 and 10.0 (found {weight})"
                    )));
                }
            }

            for (name, value) in [
                ("content_signal_threshold", scoring.content_signal_threshold),
                ("minimum_viable_score", scoring.minimum_viable_score),
                ("excellent_score", scoring.excellent_score),
            ] {
                if value.is_some_and(|value| value > 100) {
                    return Err(AiReadyError::ConfigParse(format!(
                        "scoring.{name} must be between 0 and 100"
                    )));
                }
            }
        }

        if let Some(fetch) = &self.fetch {
            if fetch.timeout_ms == Some(0) {
                return Err(AiReadyError::ConfigParse(
                    "fetch.timeout_ms must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(files) = &self.files {
            if let Some(locations) = &files.sitemap_locations {
                if locations.is_empty() {
                    return Err(AiReadyError::ConfigParse(
                        "files.sitemap_locations cannot be empty".to_string(),
                    ));
                }
                if let Some(bad) = locations.iter().find(|path| !path.starts_with('/')) {
                    return Err(AiReadyError::ConfigParse(format!(
                        "files.sitemap_locations entries must start with '/': {bad}"
                    )));
                }
            }
            if files.llms_variants.as_ref().is_some_and(Vec::is_empty) {
                return Err(AiReadyError::ConfigParse(
                    "files.llms_variants cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn normalize_domains(domains: &[String]) -> Vec<String> {
    domains
        .iter()
        .map(|domain| domain.trim().to_lowercase())
        .filter(|domain| !domain.is_empty())
        .collect()
}
