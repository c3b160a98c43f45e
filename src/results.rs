use serde::{Deserialize, Serialize};

/// Sentinel used when a page has no `<title>` element
pub const NO_TITLE: &str = "No Title Found";
/// Sentinel used when neither description meta tag is present
pub const NO_DESCRIPTION: &str = "No Description Found";
/// Sentinel used when the keywords meta tag is absent
pub const NO_KEYWORDS: &str = "No Keywords Found";
/// Sentinel used when the page has no `<nav>` element
pub const NO_NAVBAR: &str = "No Navigation Bar Found";
/// Sentinel used in prompts when the page yielded no text chunks
pub const NO_CONTENT: &str = "No Content Found";

/// Structured snapshot of a single scraped page
///
/// Built exactly once per session and shared read-only by every query
/// afterwards. The metadata fields always hold either the extracted value
/// or the matching sentinel, never an empty placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL the record was scraped from
    pub url: String,

    /// Text of the first `<title>` element
    pub title: String,

    /// Content of `meta[name=description]`, falling back to `og:description`
    pub description: String,

    /// Content of `meta[name=keywords]`
    pub keywords: String,

    /// Visible text of the first `<nav>` element, one block per line
    pub navbar_text: String,

    /// Visible text of every `<div>`, blocks separated by a blank line
    pub div_content: String,

    /// Whole-page visible text, grouped into chunks of at most
    /// `chunk_size` whitespace-delimited words
    pub text_chunks: Vec<String>,

    /// Absolute, validated, deduplicated URLs from anchor tags
    pub deep_links: Vec<String>,
}
