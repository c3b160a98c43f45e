pub mod client;
pub mod prompt;

use crate::config::ChatConfig;
use crate::error::CompletionError;
use crate::results::PageRecord;
use client::CompletionClient;

/// Answers queries about one scraped page via the completion service
///
/// Holds the injected credential and endpoint configuration for its whole
/// lifetime; each query is answered independently from the same record.
pub struct Responder {
    client: CompletionClient,
}

impl Responder {
    /// Create a responder for the given completion configuration
    pub fn new(config: ChatConfig) -> Result<Self, CompletionError> {
        Ok(Self {
            client: CompletionClient::new(config)?,
        })
    }

    /// Answer one query against the record
    ///
    /// Returns the generated text verbatim, or a formatted error string
    /// when the completion call fails. A failed query never ends the
    /// session.
    pub async fn answer(&self, record: &PageRecord, query: &str) -> String {
        let user_prompt = prompt::build_prompt(record, query);

        match self.client.complete(prompt::SYSTEM_PROMPT, &user_prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                ::log::warn!("Completion call failed: {}", e);
                format!("Error while generating response: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PageRecord {
        PageRecord {
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            description: "d".to_string(),
            keywords: "k".to_string(),
            navbar_text: "n".to_string(),
            div_content: "body".to_string(),
            text_chunks: vec!["chunk".to_string()],
            deep_links: vec!["https://example.com/a".to_string()],
        }
    }

    #[tokio::test]
    async fn test_failed_completion_becomes_error_string() {
        // Loopback port 1 refuses connections, so the call fails fast
        let config = ChatConfig {
            api_key: "test-key".to_string(),
            api_base: "http://127.0.0.1:1/v1".to_string(),
            ..ChatConfig::default()
        };
        let responder = Responder::new(config).unwrap();

        let answer = responder.answer(&record(), "What is this page about?").await;
        assert!(answer.starts_with("Error while generating response: "));
    }

    #[tokio::test]
    async fn test_responder_survives_repeated_failures() {
        let config = ChatConfig {
            api_key: "test-key".to_string(),
            api_base: "http://127.0.0.1:1/v1".to_string(),
            ..ChatConfig::default()
        };
        let responder = Responder::new(config).unwrap();

        let first = responder.answer(&record(), "first").await;
        let second = responder.answer(&record(), "second").await;
        assert!(first.starts_with("Error while generating response: "));
        assert!(second.starts_with("Error while generating response: "));
    }
}
