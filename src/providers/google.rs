use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::RemoteTranslationService;

/// Default public translate endpoint
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Browser-style user agent; the endpoint rejects obvious non-browser clients
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Client for the public Google translate endpoint (gtx client)
pub struct GoogleTranslateClient {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint base URL
    endpoint: String,
}

impl GoogleTranslateClient {
    /// Create a new client against the default public endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a new client against a specific endpoint base URL
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let endpoint = if endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            endpoint
        };

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .user_agent(DEFAULT_USER_AGENT)
                .build()
                .unwrap_or_default(),
            endpoint,
        }
    }

    /// Build the single-translate request URL
    fn request_url(&self, text: &str, from: &str, to: &str) -> Result<Url, ProviderError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));

        let mut url = Url::parse(&base)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", from)
            .append_pair("tl", to)
            .append_pair("dt", "t")
            .append_pair("q", text);

        Ok(url)
    }

    /// Pull the translated text out of the nested response array
    ///
    /// The endpoint answers with `[[["<translated>", "<original>", ...], ...], ...]`;
    /// the first segment of the first sentence is the translation.
    fn extract_translation(body: &serde_json::Value) -> Result<String, ProviderError> {
        let translated = body
            .get(0)
            .and_then(|sentences| sentences.get(0))
            .and_then(|segment| segment.get(0))
            .and_then(|text| text.as_str())
            .ok_or(ProviderError::EmptyResponse)?;

        if translated.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(translated.to_string())
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteTranslationService for GoogleTranslateClient {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, ProviderError> {
        let url = self.request_url(text, from, to)?;

        debug!("Requesting remote translation {} -> {}", from, to);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translate endpoint error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Invalid JSON response: {}", e)))?;

        Self::extract_translation(&body)
    }
}
