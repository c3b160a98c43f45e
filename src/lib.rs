// Re-export modules
pub mod chat;
pub mod config;
pub mod error;
pub mod links;
pub mod parsers;
pub mod results;
pub mod scrapers;

// Re-export commonly used types for convenience
pub use chat::Responder;
pub use error::{CompletionError, ScrapeError};
pub use results::PageRecord;

use config::ScraperConfig;

/// Builder for scraping a single page into a [`PageRecord`]
///
/// The record is built exactly once; every query afterwards reads the
/// same immutable snapshot.
pub struct Site {
    url: String,
    config: ScraperConfig,
}

impl Site {
    /// Create a new Site builder for the given URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            config: ScraperConfig::default(),
        }
    }

    /// Apply a scraper configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of words per text chunk
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Set the fetch timeout in seconds
    pub fn with_fetch_timeout(mut self, seconds: u64) -> Self {
        self.config.fetch_timeout_secs = seconds;
        self
    }

    /// Fetch the page once and build its structured record
    pub async fn scrape(self) -> Result<PageRecord, ScrapeError> {
        scrapers::web::scrape(&self.url, &self.config).await
    }
}
