use crate::error::Result;
use crate::types::config::{Settings, CONTENT_SIGNAL_IDS};
use crate::types::report::CheckResult;
use crate::types::scoring::ScoreBreakdown;
use crate::urls::{domain_reputation_bonus, hostname};

/// Weighted mean of all checks, adjusted by content signals, the viability floor
/// and the domain reputation bonus. The result never exceeds 100.
pub fn overall_score(checks: &[CheckResult], url: &str, settings: &Settings) -> Result<ScoreBreakdown> {
    let (weighted_sum, total_weight) =
        checks
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, total), check| {
                let weight = settings.weight(&check.id);
                (sum + f64::from(check.score) * weight, total + weight)
            });
    let weighted_base = if total_weight > 0.0 {
        (weighted_sum / total_weight).round() as i32
    } else {
        0
    };

    let thresholds = &settings.thresholds;
    let content_signals = checks
        .iter()
        .filter(|check| {
            CONTENT_SIGNAL_IDS.contains(&check.id.as_str())
                && check.score >= thresholds.content_signal
        })
        .count();
    let content_bonus = match content_signals {
        n if n >= 3 => settings.bonus.three_content_signals,
        2 => settings.bonus.two_content_signals,
        _ => 0,
    };

    let mut base = weighted_base + content_bonus;
    let minimum_viable = i32::from(thresholds.minimum_viable);
    let floor_applied = base < minimum_viable
        && checks
            .iter()
            .any(|check| check.score >= thresholds.excellent);
    if floor_applied {
        base = minimum_viable;
    }

    let reputation_bonus = domain_reputation_bonus(&hostname(url)?, settings);
    let overall = (base + reputation_bonus).clamp(0, 100) as u8;

    Ok(ScoreBreakdown {
        weighted_base,
        content_signals,
        content_bonus,
        floor_applied,
        reputation_bonus,
        overall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::Status;

    fn check(id: &str, score: u8) -> CheckResult {
        CheckResult {
            id: id.to_string(),
            label: id.to_string(),
            status: Status::Pass,
            score,
            details: String::new(),
            recommendation: String::new(),
        }
    }

    fn score(checks: &[CheckResult], url: &str) -> ScoreBreakdown {
        overall_score(checks, url, &Settings::default()).expect("url should be valid")
    }

    #[test]
    fn weighted_mean_uses_per_check_weights() {
        // (100 * 1.5 + 0 * 0.3) / 1.8 = 83.33
        let breakdown = score(
            &[check("readability", 100), check("llms-txt", 0)],
            "https://example.com",
        );
        assert_eq!(breakdown.weighted_base, 83);
        assert_eq!(breakdown.content_signals, 1);
        assert_eq!(breakdown.content_bonus, 0);
        assert_eq!(breakdown.overall, 83);
    }

    #[test]
    fn unknown_checks_weigh_one() {
        let breakdown = score(&[check("custom", 40), check("other", 60)], "example.com");
        assert_eq!(breakdown.weighted_base, 50);
    }

    #[test]
    fn content_signals_add_bonus() {
        let two = score(
            &[
                check("readability", 60),
                check("heading-structure", 60),
                check("meta-tags", 59),
            ],
            "https://example.com",
        );
        assert_eq!(two.content_signals, 2);
        assert_eq!(two.content_bonus, 10);

        let three = score(
            &[
                check("readability", 60),
                check("heading-structure", 60),
                check("meta-tags", 60),
            ],
            "https://example.com",
        );
        assert_eq!(three.content_bonus, 15);
        assert_eq!(three.overall, 75);
    }

    #[test]
    fn floor_rescues_sites_with_an_excellent_check() {
        let checks = [
            check("anti-bot", 100),
            check("readability", 0),
            check("heading-structure", 0),
            check("meta-tags", 0),
            check("llms-txt", 0),
            check("robots-txt", 0),
            check("sitemap", 0),
        ];
        let breakdown = score(&checks, "https://example.com");
        assert!(breakdown.weighted_base < 35);
        assert!(breakdown.floor_applied);
        assert_eq!(breakdown.overall, 35);

        let without_excellent = score(&checks[1..], "https://example.com");
        assert!(!without_excellent.floor_applied);
        assert_eq!(without_excellent.overall, 0);
    }

    #[test]
    fn reputation_bonus_is_added_and_capped() {
        let checks = [check("readability", 90), check("heading-structure", 90), check("meta-tags", 90)];
        let docs = score(&checks, "https://docs.stripe.com/api");
        assert_eq!(docs.reputation_bonus, 20);
        assert_eq!(docs.overall, 100);

        let plain = score(&[check("sitemap", 50)], "https://www.stripe.com");
        assert_eq!(plain.reputation_bonus, 18);
        assert_eq!(plain.overall, 68);
    }

    #[test]
    fn raising_any_check_never_lowers_the_total() {
        let ids = [
            "llms-txt",
            "robots-txt",
            "sitemap",
            "heading-structure",
            "readability",
            "meta-tags",
            "semantic-html",
            "accessibility",
            "structured-data",
            "anti-bot",
        ];
        let baseline = [0u8, 60, 0, 60, 20, 50, 36, 40, 0, 100];
        for (index, id) in ids.iter().enumerate() {
            let mut previous = 0;
            for value in (0..=100).step_by(5) {
                let checks = ids
                    .iter()
                    .zip(baseline)
                    .enumerate()
                    .map(|(i, (other, base))| check(other, if i == index { value } else { base }))
                    .collect::<Vec<_>>();
                let overall = score(&checks, "https://example.com").overall;
                assert!(overall >= previous, "{id} at {value} lowered the score");
                previous = overall;
            }
        }
    }

    #[test]
    fn invalid_url_is_reported() {
        let err = overall_score(&[check("sitemap", 10)], "exa mple.com", &Settings::default());
        assert!(err.is_err());
    }
}
