use std::time::Duration;
use serde::{Serialize, Deserialize};
use reqwest::Client;
use async_trait::async_trait;
use log::error;

use crate::errors::ProviderError;
use super::Provider;

/// Internal locale code -> Google Translate language code.
///
/// Google covers the full site locale set. Chinese maps to the
/// simplified variant served on the site.
const LANGUAGE_MAP: [(&str, &str); 19] = [
    ("uk", "uk"),
    ("ru", "ru"),
    ("be", "be"),
    ("ka", "ka"),
    ("hi", "hi"),
    ("ro", "ro"),
    ("zh", "zh-CN"),
    ("vi", "vi"),
    ("tr", "tr"),
    ("ne", "ne"),
    ("de", "de"),
    ("es", "es"),
    ("fr", "fr"),
    ("it", "it"),
    ("ar", "ar"),
    ("pt", "pt"),
    ("ko", "ko"),
    ("ja", "ja"),
    ("th", "th"),
];

/// Google Cloud Translation (v2) client
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API key passed as a query parameter
    api_key: String,
    /// API endpoint URL
    endpoint: String,
}

/// Google translate request body
#[derive(Debug, Serialize)]
pub struct GoogleRequest {
    /// Text to translate
    pub q: String,
    /// Source language code
    pub source: String,
    /// Target language code
    pub target: String,
    /// "text" keeps the response from being HTML-escaped
    pub format: String,
}

/// Google translate response envelope
#[derive(Debug, Deserialize)]
pub struct GoogleResponse {
    /// Payload wrapper
    pub data: GoogleTranslations,
}

/// Translations payload
#[derive(Debug, Deserialize)]
pub struct GoogleTranslations {
    /// Translations, one per input text
    pub translations: Vec<GoogleTranslation>,
}

/// Individual translation in a Google response
#[derive(Debug, Deserialize)]
pub struct GoogleTranslation {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl GoogleTranslate {
    /// Create a new Google Translate client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let mut endpoint = endpoint.into();
        if endpoint.is_empty() {
            endpoint = "https://translation.googleapis.com".to_string();
        }

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint,
        }
    }

    async fn request(&self, request: GoogleRequest) -> Result<GoogleResponse, ProviderError> {
        let api_url = format!(
            "{}/language/translate/v2",
            self.endpoint.trim_end_matches('/')
        );

        let response = self.client.post(&api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, error_text);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(error_text),
                429 => ProviderError::RateLimitExceeded(error_text),
                code => ProviderError::ApiError { status_code: code, message: error_text },
            });
        }

        response.json::<GoogleResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    fn name(&self) -> &'static str {
        "google"
    }

    fn resolve_locale(&self, locale: &str) -> Option<&'static str> {
        LANGUAGE_MAP.iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, google_code)| *google_code)
    }

    fn supported_locales(&self) -> Vec<&'static str> {
        LANGUAGE_MAP.iter().map(|(code, _)| *code).collect()
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        let request = GoogleRequest {
            q: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            format: "text".to_string(),
        };

        let response = self.request(request).await?;
        response.data.translations.into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ProviderError::ParseError("empty translations array".to_string()))
    }
}
