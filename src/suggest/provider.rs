//! Upstream autocomplete provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::ProviderError;
use crate::suggest::ProviderResponse;

/// Source of raw autocomplete data for a keyword.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn complete(&self, keyword: &str) -> Result<ProviderResponse, ProviderError>;
}

/// Provider speaking the suggest-queries HTTP protocol:
/// `GET <url>?client=<variant>&q=<keyword>`.
#[derive(Debug, Clone)]
pub struct HttpSuggestProvider {
    client: Client,
    url: String,
    client_variant: String,
}

impl HttpSuggestProvider {
    /// Wraps an existing HTTP client.
    pub fn new(client: Client, url: impl Into<String>, client_variant: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            client_variant: client_variant.into(),
        }
    }

    /// Builds a provider with its own client, bounded by the configured timeouts.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("keyword_suggest/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(config.provider_connect_timeout))
            .timeout(Duration::from_secs(config.provider_timeout))
            .build()?;

        Ok(Self::new(
            client,
            config.provider_url.clone(),
            config.provider_client.clone(),
        ))
    }
}

#[async_trait]
impl SuggestionProvider for HttpSuggestProvider {
    async fn complete(&self, keyword: &str) -> Result<ProviderResponse, ProviderError> {
        debug!(%keyword, url = %self.url, "Querying suggestion provider");

        let response = self
            .client
            .get(&self.url)
            .query(&[("client", self.client_variant.as_str()), ("q", keyword)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        ProviderResponse::from_slice(&body)
    }
}
