use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::links;
use crate::parsers::{html, text};
use crate::results::{self, PageRecord};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches one page and builds its structured record
///
/// Exactly one outbound request, no retries. Any transport failure or
/// non-success status is terminal for the session.
pub async fn scrape(url: &str, config: &ScraperConfig) -> Result<PageRecord, ScrapeError> {
    ::log::info!("Fetching page: {}", url);

    let client = Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Network(format!("status {} for {}", status, url)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    ::log::debug!("Fetched {} bytes from {}", body.len(), url);

    // Links resolve against the origin of the URL that was asked for,
    // not wherever a redirect may have landed
    let requested = Url::parse(url)
        .map_err(|e| ScrapeError::Unknown(format!("cannot parse {}: {}", url, e)))?;

    build_record(&requested, &body, config)
}

/// Assembles a page record from raw HTML
///
/// Pure apart from logging; tests exercise it directly with fixture
/// documents.
pub fn build_record(
    url: &Url,
    body: &str,
    config: &ScraperConfig,
) -> Result<PageRecord, ScrapeError> {
    let base = links::origin_of(url)
        .ok_or_else(|| ScrapeError::Unknown(format!("no host in {}", url)))?;

    let parsed = html::parse(body);
    let deep_links = links::resolve_links(&base, parsed.hrefs.iter().map(String::as_str));
    let text_chunks = text::chunk_text(&parsed.page_text, config.chunk_size);

    ::log::info!(
        "Extracted {} links and {} text chunks from {}",
        deep_links.len(),
        text_chunks.len(),
        url
    );

    Ok(PageRecord {
        url: url.to_string(),
        title: parsed
            .title
            .unwrap_or_else(|| results::NO_TITLE.to_string()),
        description: parsed
            .description
            .unwrap_or_else(|| results::NO_DESCRIPTION.to_string()),
        keywords: parsed
            .keywords
            .unwrap_or_else(|| results::NO_KEYWORDS.to_string()),
        navbar_text: parsed
            .navbar_text
            .unwrap_or_else(|| results::NO_NAVBAR.to_string()),
        div_content: parsed.div_content,
        text_chunks,
        deep_links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/docs/intro").unwrap()
    }

    #[test]
    fn test_bare_page_gets_sentinels() {
        let record = build_record(
            &page_url(),
            "<html><body><p>hello</p></body></html>",
            &ScraperConfig::default(),
        )
        .unwrap();

        assert_eq!(record.title, results::NO_TITLE);
        assert_eq!(record.description, results::NO_DESCRIPTION);
        assert_eq!(record.keywords, results::NO_KEYWORDS);
        assert_eq!(record.navbar_text, results::NO_NAVBAR);
        assert_eq!(record.text_chunks, vec!["hello"]);
        assert!(record.deep_links.is_empty());
    }

    #[test]
    fn test_links_resolve_against_origin_not_page_path() {
        let body = r##"<html><body>
            <a href="guide">Guide</a>
            <a href="/faq">FAQ</a>
            <a href="https://other.org/x">Other</a>
            <a href="guide">Guide again</a>
            <a href="javascript:void(0)">Noop</a>
        </body></html>"##;

        let record = build_record(&page_url(), body, &ScraperConfig::default()).unwrap();

        // "guide" lands at the host root because the page path is discarded
        assert_eq!(
            record.deep_links,
            vec![
                "https://example.com/guide",
                "https://example.com/faq",
                "https://other.org/x",
            ]
        );
    }

    #[test]
    fn test_page_text_is_chunked_by_configured_size() {
        let words = vec!["word"; 2500].join(" ");
        let body = format!("<html><body><p>{}</p></body></html>", words);

        let record = build_record(&page_url(), &body, &ScraperConfig::default()).unwrap();

        assert_eq!(record.text_chunks.len(), 3);
        assert_eq!(record.text_chunks[0].split_whitespace().count(), 1000);
        assert_eq!(record.text_chunks[1].split_whitespace().count(), 1000);
        assert_eq!(record.text_chunks[2].split_whitespace().count(), 500);
    }

    #[test]
    fn test_hostless_url_is_rejected() {
        let url = Url::parse("data:text/html,hi").unwrap();
        let result = build_record(&url, "<html></html>", &ScraperConfig::default());
        assert!(matches!(result, Err(ScrapeError::Unknown(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        // Port 1 on loopback refuses the connection immediately
        let result = scrape("http://127.0.0.1:1/", &ScraperConfig::default()).await;
        assert!(matches!(result, Err(ScrapeError::Network(_))));
    }

    #[tokio::test]
    async fn test_malformed_url_is_a_network_error() {
        let result = scrape("not a url", &ScraperConfig::default()).await;
        assert!(matches!(result, Err(ScrapeError::Network(_))));
    }
}
