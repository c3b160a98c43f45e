use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the page scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Maximum number of words per extracted text chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Timeout for the page fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with the fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Configuration for the completion service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// API credential for the completion endpoint
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model requested for each completion
    #[serde(default = "default_model")]
    pub model: String,

    /// Cap on generated tokens per answer
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for each completion
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Combined configuration for one Q&A session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Scraper settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Completion service settings
    #[serde(default)]
    pub chat: ChatConfig,
}

impl SessionConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl ChatConfig {
    /// Build a chat configuration from the process environment
    ///
    /// Reads `OPENAI_API_KEY`, with optional `OPENAI_API_BASE` and
    /// `OPENAI_MODEL` overrides. The credential only ever lives in this
    /// value; nothing global is mutated.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }
        if let Ok(base) = std::env::var("OPENAI_API_BASE") {
            if !base.is_empty() {
                config.api_base = base;
            }
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }

        config
    }
}

/// Default number of words per text chunk
fn default_chunk_size() -> usize {
    1000
}

/// Default fetch timeout in seconds
fn default_fetch_timeout_secs() -> u64 {
    10
}

/// Default User-Agent header
fn default_user_agent() -> String {
    concat!("sitechat/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default completion API base URL
fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default completion model
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default cap on generated tokens
fn default_max_tokens() -> u32 {
    500
}

/// Default sampling temperature
fn default_temperature() -> f32 {
    0.7
}
