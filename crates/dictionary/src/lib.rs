use std::time::Duration;

use dictionary_api::get_definitions;
use reqwest::Url;
use thiserror::Error;

mod dictionary;
mod dictionary_api;
#[cfg(any(test, feature = "test-util"))]
pub mod test_server;

pub use dictionary::{Definition, DictionaryEntry, License, Meaning, Phonetic};

/// Public free dictionary endpoint, the word is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid dictionary API url: {0}")]
    InvalidBaseUrl(String),

    #[error("the word to look up is empty")]
    EmptyWord,

    #[error("failed to send the request: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("request failed with status code: {status}")]
    Status { status: u16 },

    #[error("failed to read the response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("failed to decode the response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::Status { status: 404 })
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    api_url: Url,
}

impl Dictionary {
    pub fn new() -> Result<Self, DictionaryError> {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let api_url = Url::parse(&config.api_url).map_err(|error| {
            DictionaryError::InvalidBaseUrl(format!("{}: {error}", config.api_url))
        })?;
        if api_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidBaseUrl(config.api_url));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DictionaryError::Client)?;
        Ok(Self { client, api_url })
    }

    /// Looks the word up, performing exactly one request.
    pub async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        get_definitions(&self.client, &self.api_url, word).await
    }
}
