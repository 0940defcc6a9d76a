use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("SCRIPT_BLOCK regex")
});
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("STYLE_BLOCK regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_END regex"));
static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouAEIOU]+").expect("VOWEL_RUN regex"));

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Plain text of a document: scripts and styles dropped, tags stripped,
/// common entities decoded and whitespace collapsed.
pub fn extract_text_content(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(html, "");
    let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");
    let mut text = TAG.replace_all(&without_styles, " ").into_owned();
    for (entity, decoded) in ENTITIES {
        text = text.replace(entity, decoded);
    }
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Flesch Reading Ease clamped to [0, 100]. Empty input scores 0.
pub fn calculate_readability(text: &str) -> f64 {
    let sentences = SENTENCE_END
        .split(text)
        .filter(|sentence| !sentence.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();
    if sentences == 0 || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words
        .iter()
        .map(|word| VOWEL_RUN.find_iter(word).count().max(1))
        .sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_strips_tags_and_collapses_whitespace() {
        assert_eq!(extract_text_content("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(
            extract_text_content("  <div>\n\n one\t<span>two</span>\n</div> "),
            "one two"
        );
    }

    #[test]
    fn extract_drops_script_and_style_blocks() {
        let html = r#"<head><STYLE type="text/css">
body { color: red; }
</STYLE><script>
var secret = "hidden";
</script></head><body>Visible</body>"#;
        let text = extract_text_content(html);
        assert_eq!(text, "Visible");
        assert!(!text.contains("secret"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn extract_decodes_common_entities() {
        assert_eq!(
            extract_text_content("<p>Fish&nbsp;&amp;&nbsp;chips &lt;3 &quot;yum&quot; it&#39;s</p>"),
            "Fish & chips <3 \"yum\" it's"
        );
    }

    #[test]
    fn readability_of_empty_or_sentenceless_text_is_zero() {
        assert_eq!(calculate_readability(""), 0.0);
        assert_eq!(calculate_readability("   "), 0.0);
        assert_eq!(calculate_readability("...!?"), 0.0);
    }

    #[test]
    fn readability_is_clamped_to_range() {
        // Short monosyllabic sentence exceeds 100 before clamping.
        assert_eq!(calculate_readability("The cat sat on the mat."), 100.0);

        let dense = "Institutionalization internationalization incomprehensibility \
                     counterrevolutionaries characteristically interdisciplinary \
                     telecommunications uncharacteristically overindustrialization.";
        assert_eq!(calculate_readability(dense), 0.0);
    }

    #[test]
    fn readability_counts_at_least_one_syllable_per_word() {
        // "rhythm" and "gym" have no vowel runs but still count one syllable each.
        let score = calculate_readability("Rhythm gym. Rhythm gym.");
        // 2 words per sentence, 1 syllable per word
        let expected: f64 = 206.835 - 1.015 * 2.0 - 84.6;
        assert!((score - expected.min(100.0)).abs() < 1e-9);
    }
}
