use std::time::Duration;
use serde::{Serialize, Deserialize};
use reqwest::Client;
use async_trait::async_trait;
use log::error;

use crate::errors::ProviderError;
use super::Provider;

/// Internal locale code -> DeepL target language code.
///
/// DeepL covers a subset of the site's locales; anything missing here is
/// reported as unsupported and left to Google Translate or manual
/// translation. Portuguese maps to the Brazilian variant.
const LANGUAGE_MAP: [(&str, &str); 12] = [
    ("uk", "UK"),
    ("ru", "RU"),
    ("de", "DE"),
    ("es", "ES"),
    ("fr", "FR"),
    ("it", "IT"),
    ("pt", "PT-BR"),
    ("zh", "ZH"),
    ("ja", "JA"),
    ("ko", "KO"),
    ("ro", "RO"),
    ("tr", "TR"),
];

/// DeepL client for interacting with the DeepL REST API
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults based on key tier)
    endpoint: String,
}

/// DeepL translate request
#[derive(Debug, Serialize)]
pub struct DeepLRequest {
    /// Texts to translate (one per leaf in our usage)
    pub text: Vec<String>,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

/// DeepL translate response
#[derive(Debug, Deserialize)]
pub struct DeepLResponse {
    /// Translations, one per input text
    pub translations: Vec<DeepLTranslation>,
}

/// Individual translation in a DeepL response
#[derive(Debug, Deserialize)]
pub struct DeepLTranslation {
    /// The translated text
    pub text: String,
    /// Language DeepL detected for the source text
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl DeepL {
    /// Create a new DeepL client.
    ///
    /// An empty endpoint picks the public API host; free-tier keys (the
    /// ones suffixed `:fx`) live on `api-free.deepl.com`.
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let api_key = api_key.into();
        let mut endpoint = endpoint.into();
        if endpoint.is_empty() {
            endpoint = if api_key.ends_with(":fx") {
                "https://api-free.deepl.com".to_string()
            } else {
                "https://api.deepl.com".to_string()
            };
        }

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key,
            endpoint,
        }
    }

    async fn request(&self, request: DeepLRequest) -> Result<DeepLResponse, ProviderError> {
        let api_url = format!("{}/v2/translate", self.endpoint.trim_end_matches('/'));

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
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
            error!("DeepL API error ({}): {}", status, error_text);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(error_text),
                429 => ProviderError::RateLimitExceeded(error_text),
                code => ProviderError::ApiError { status_code: code, message: error_text },
            });
        }

        response.json::<DeepLResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Provider for DeepL {
    fn name(&self) -> &'static str {
        "deepl"
    }

    fn resolve_locale(&self, locale: &str) -> Option<&'static str> {
        LANGUAGE_MAP.iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, deepl_code)| *deepl_code)
    }

    fn supported_locales(&self) -> Vec<&'static str> {
        LANGUAGE_MAP.iter().map(|(code, _)| *code).collect()
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        let request = DeepLRequest {
            text: vec![text.to_string()],
            source_lang: source.to_uppercase(),
            target_lang: target.to_string(),
        };

        let response = self.request(request).await?;
        response.translations.into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| ProviderError::ParseError("empty translations array".to_string()))
    }
}
