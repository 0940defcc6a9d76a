use super::Fetcher;
use crate::error::{AiReadyError, Result};
use crate::text::extract_text_content;
use crate::types::report::PageMetadata;
use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("TITLE regex"));
static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\s[^>]*>").expect("META_TAG regex"));
static META_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:name|property)\s*=\s*["']([^"']+)["']"#).expect("META_KEY regex")
});
static META_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("META_CONTENT regex")
});

/// Raw HTML plus the metadata bag a scraper would report for it.
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    pub url: String,
    pub html: String,
    pub metadata: PageMetadata,
}

pub fn scrape_page(fetcher: &dyn Fetcher, url: &str) -> Result<ScrapedPage> {
    let response = fetcher.get(url)?;
    if response.body.trim().is_empty() {
        return Err(AiReadyError::EmptyContent(format!(
            "{url} returned an empty body (status {})",
            response.status
        )));
    }
    if !response.is_ok() {
        tracing::warn!(url, status = response.status, "page responded with non-success status");
    }
    let metadata = extract_page_metadata(&response.body, Some(response.status), url);
    Ok(ScrapedPage {
        url: url.to_string(),
        html: response.body,
        metadata,
    })
}

pub fn extract_page_metadata(html: &str, status: Option<u16>, url: &str) -> PageMetadata {
    let mut metadata = PageMetadata::default();
    metadata.insert("sourceURL", url);
    if let Some(status) = status {
        metadata.insert("statusCode", status);
    }

    if let Some(title) = TITLE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|title| extract_text_content(title.as_str()))
        .filter(|title| !title.is_empty())
    {
        metadata.insert("title", title);
    }

    for tag in META_TAG.find_iter(html) {
        let tag = tag.as_str();
        let Some(key) = META_KEY.captures(tag).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let Some(content) = META_CONTENT
            .captures(tag)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        else {
            continue;
        };
        let field = match key.as_str().to_ascii_lowercase().as_str() {
            "description" => "description",
            "og:title" => "ogTitle",
            "og:description" => "ogDescription",
            "author" => "author",
            "language" => "language",
            _ => continue,
        };
        if metadata.text(field).is_none() {
            metadata.insert(field, content.as_str().trim());
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::FakeFetcher;

    const PAGE: &str = r#"<html><head>
<title> Pricing &amp; Plans </title>
<meta content="Simple pricing for every team." name="description">
<meta property='og:title' content='Pricing'>
<meta name="viewport" content="width=device-width">
</head><body><h1>Pricing</h1></body></html>"#;

    #[test]
    fn metadata_is_derived_from_head_tags() {
        let metadata = extract_page_metadata(PAGE, Some(200), "https://example.com/pricing");
        assert_eq!(metadata.text("title"), Some("Pricing & Plans"));
        assert_eq!(metadata.text("description"), Some("Simple pricing for every team."));
        assert_eq!(metadata.text("ogTitle"), Some("Pricing"));
        assert_eq!(metadata.text("ogDescription"), None);
        assert_eq!(metadata.status_code(), Some(200));
        assert_eq!(metadata.text("sourceURL"), Some("https://example.com/pricing"));
    }

    #[test]
    fn scrape_keeps_html_and_status() {
        let fetcher = FakeFetcher::new().with("https://example.com", 403, PAGE);
        let page = scrape_page(&fetcher, "https://example.com").expect("scrape should succeed");
        assert_eq!(page.html, PAGE);
        assert_eq!(page.metadata.status_code(), Some(403));
    }

    #[test]
    fn scrape_rejects_empty_body() {
        let fetcher = FakeFetcher::new().with("https://example.com", 200, "  \n ");
        let err = scrape_page(&fetcher, "https://example.com").expect_err("empty body is fatal");
        assert!(matches!(err, AiReadyError::EmptyContent(_)));
    }

    #[test]
    fn scrape_propagates_transport_errors() {
        let fetcher = FakeFetcher::new().failing("https://example.com");
        assert!(matches!(
            scrape_page(&fetcher, "https://example.com"),
            Err(AiReadyError::Fetch(_))
        ));
    }
}
