/*!
 * Google Translate client using the public web endpoint.
 *
 * Talks to the `translate_a/single` gtx endpoint, which answers with a
 * nested JSON array; the translated text is spread over the first element
 * of each segment in the first array.
 */

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, header};
use serde_json::Value;

use crate::errors::ProviderError;
use crate::language_utils::language_display_name;
use crate::providers::TranslationProvider;

/// Stable identifier, used in cache file names
const PROVIDER_ID: &str = "google";

/// Human-readable provider name
const PROVIDER_NAME: &str = "Google Translate";

/// Default endpoint of the web translation API
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Language codes the web endpoint is known to accept
const SUPPORTED_LANGUAGE_CODES: &[&str] = &[
    "ar", "cs", "da", "de", "el", "en", "es", "fi", "fr", "he", "hi", "hu", "id", "it", "ja",
    "ko", "nl", "no", "pl", "pt", "ro", "ru", "sv", "th", "tr", "uk", "vi", "zh",
];

/// Google Translate client for the public gtx web endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,

    /// Endpoint URL, overridable for testing
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client against the public endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a new client against a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Extract the translated text from the nested response array
    fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body.get(0).and_then(Value::as_array).ok_or_else(|| {
            ProviderError::ParseError("response has no translation segments".to_string())
        })?;

        let mut output = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                output.push_str(text);
            }
        }

        if output.is_empty() {
            return Err(ProviderError::EmptyTranslation);
        }

        Ok(output)
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn display_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn supported_languages(&self) -> HashMap<String, String> {
        SUPPORTED_LANGUAGE_CODES
            .iter()
            .filter_map(|code| {
                language_display_name(code)
                    .ok()
                    .map(|name| (code.to_string(), name))
            })
            .collect()
    }

    async fn translate_raw(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body)
    }
}
