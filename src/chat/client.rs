use crate::config::ChatConfig;
use crate::error::CompletionError;
use reqwest::Client;

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat completion endpoint
pub struct CompletionClient {
    client: Client,
    config: ChatConfig,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// The underlying HTTP client carries no timeout; a completion call
    /// runs until the endpoint answers or the connection drops.
    pub fn new(config: ChatConfig) -> Result<Self, CompletionError> {
        let client = Client::builder().build()?;

        let mut config = config;
        config.api_base = config.api_base.trim_end_matches('/').to_string();

        ::log::debug!(
            "Completion client configured: endpoint={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Request one completion for a system/user message pair
    ///
    /// Stateless with respect to prior calls: no streaming, no retry,
    /// no conversation history.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::NoChoices)
    }
}
