use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base language code the bundles are translated from (ISO 639-1)
    pub source_language: String,

    /// Directory holding the message bundles (source and outputs)
    #[serde(default = "default_messages_dir")]
    pub messages_dir: String,

    /// Translation config
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: DeepL API
    #[default]
    DeepL,
    // @provider: Google Cloud Translation v2
    Google,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::DeepL => "DeepL",
            Self::Google => "Google Translate",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::DeepL => "deepl".to_string(),
            Self::Google => "google".to_string(),
        }
    }

    // @returns: Environment variable holding this provider's API key
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::DeepL => "DEEPL_API_KEY",
            Self::Google => "GOOGLE_TRANSLATE_API_KEY",
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "deepl" => Ok(Self::DeepL),
            "google" => Ok(Self::Google),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: API key (falls back to the provider's environment variable)
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Minimum delay between provider calls, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::DeepL => Self {
                provider_type: "deepl".to_string(),
                api_key: String::new(),
                endpoint: default_deepl_endpoint(),
                timeout_secs: default_timeout_secs(),
                delay_ms: default_deepl_delay_ms(),
            },
            TranslationProvider::Google => Self {
                provider_type: "google".to_string(),
                api_key: String::new(),
                endpoint: default_google_endpoint(),
                timeout_secs: default_timeout_secs(),
                delay_ms: default_google_delay_ms(),
            },
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Available translation providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_messages_dir() -> String {
    "messages".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_delay_ms() -> u64 {
    50
}

fn default_deepl_delay_ms() -> u64 {
    // Matches the cadence the DeepL quota tolerates for free-tier keys
    50
}

fn default_google_delay_ms() -> u64 {
    30
}

fn default_deepl_endpoint() -> String {
    "https://api.deepl.com".to_string()
}

fn default_google_endpoint() -> String {
    "https://translation.googleapis.com".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the base language
        crate::language_utils::validate_locale_code(&self.source_language)?;

        if self.messages_dir.is_empty() {
            return Err(anyhow!("messages_dir must not be empty"));
        }

        // Both supported providers require an API key; a missing key is
        // fatal before any locale is attempted
        let api_key = self.translation.get_api_key();
        if api_key.is_empty() {
            return Err(anyhow!(
                "Translation API key is required for the {} provider (set it in the config file or via {})",
                self.translation.provider.display_name(),
                self.translation.provider.api_key_env_var()
            ));
        }

        Ok(())
    }

    /// Path of the base-language bundle this configuration points at
    pub fn source_bundle_path(&self) -> std::path::PathBuf {
        crate::file_utils::FileManager::bundle_path(&self.messages_dir, &self.source_language)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            messages_dir: default_messages_dir(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl TranslationConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers.iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get a specific provider configuration by type for testing
    pub fn get_provider_config(&self, provider_type: &TranslationProvider) -> Option<&ProviderConfig> {
        let provider_str = provider_type.to_lowercase_string();
        self.available_providers.iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the API key for the active provider.
    ///
    /// The config file wins; the provider's environment variable is the
    /// fallback so keys can stay out of version-controlled config.
    pub fn get_api_key(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.api_key.is_empty() {
                return provider_config.api_key.clone();
            }
        }

        std::env::var(self.provider.api_key_env_var()).unwrap_or_default()
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TranslationProvider::DeepL => default_deepl_endpoint(),
            TranslationProvider::Google => default_google_endpoint(),
        }
    }

    /// Get the request timeout for the active provider
    pub fn get_timeout_secs(&self) -> u64 {
        if let Some(provider_config) = self.get_active_provider_config() {
            if provider_config.timeout_secs > 0 {
                return provider_config.timeout_secs;
            }
        }

        default_timeout_secs()
    }

    /// Get the inter-request delay for the active provider
    pub fn get_delay_ms(&self) -> u64 {
        if let Some(provider_config) = self.get_active_provider_config() {
            return provider_config.delay_ms;
        }

        // Default fallback based on provider type
        match self.provider {
            TranslationProvider::DeepL => default_deepl_delay_ms(),
            TranslationProvider::Google => default_google_delay_ms(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: TranslationProvider::default(),
            available_providers: Vec::new(),
        };

        // Add default providers
        config.available_providers.push(ProviderConfig::new(TranslationProvider::DeepL));
        config.available_providers.push(ProviderConfig::new(TranslationProvider::Google));

        config
    }
}
