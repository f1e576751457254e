/*!
 * Tests for configuration loading, defaults and validation
 */

use std::str::FromStr;

use i18n_bundler::app_config::{Config, ProviderConfig, TranslationProvider};

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.source_language, "en");
    assert_eq!(config.messages_dir, "messages");
    assert_eq!(config.translation.provider, TranslationProvider::DeepL);
    assert_eq!(config.translation.available_providers.len(), 2);
}

/// Test provider enum parsing and display round trip
#[test]
fn test_provider_fromStr_withValidNames_shouldParse() {
    assert_eq!(TranslationProvider::from_str("deepl").unwrap(), TranslationProvider::DeepL);
    assert_eq!(TranslationProvider::from_str("DeepL").unwrap(), TranslationProvider::DeepL);
    assert_eq!(TranslationProvider::from_str("google").unwrap(), TranslationProvider::Google);
    assert!(TranslationProvider::from_str("bing").is_err());

    assert_eq!(TranslationProvider::DeepL.to_string(), "deepl");
    assert_eq!(TranslationProvider::Google.to_string(), "google");
}

/// Test config JSON round trip keeps provider blocks
#[test]
fn test_config_serde_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.source_language, config.source_language);
    assert_eq!(parsed.translation.provider, config.translation.provider);
    assert_eq!(parsed.translation.available_providers.len(), 2);
}

/// Test per-provider defaults for delay and endpoint
#[test]
fn test_provider_defaults_shouldMatchProviderCadence() {
    let deepl = ProviderConfig::new(TranslationProvider::DeepL);
    assert_eq!(deepl.delay_ms, 50);
    assert_eq!(deepl.endpoint, "https://api.deepl.com");

    let google = ProviderConfig::new(TranslationProvider::Google);
    assert_eq!(google.delay_ms, 30);
    assert_eq!(google.endpoint, "https://translation.googleapis.com");
}

/// Test active provider lookup and delay selection follow the provider switch
#[test]
fn test_translation_config_activeProvider_shouldFollowProviderField() {
    let mut config = Config::default();

    config.translation.provider = TranslationProvider::DeepL;
    assert_eq!(config.translation.get_active_provider_config().unwrap().provider_type, "deepl");
    assert_eq!(config.translation.get_delay_ms(), 50);

    config.translation.provider = TranslationProvider::Google;
    assert_eq!(config.translation.get_active_provider_config().unwrap().provider_type, "google");
    assert_eq!(config.translation.get_delay_ms(), 30);
}

/// Test API key resolution prefers the config file over the environment
#[test]
fn test_get_api_key_withConfigValue_shouldPreferConfig() {
    let mut config = Config::default();
    for provider in &mut config.translation.available_providers {
        if provider.provider_type == "deepl" {
            provider.api_key = "key-from-config".to_string();
        }
    }

    assert_eq!(config.translation.get_api_key(), "key-from-config");
}

/// Test validation rejects a missing API key before any locale is attempted
#[test]
fn test_validate_withoutApiKey_shouldFail() {
    // Neither the config nor the environment carries a key here
    unsafe { std::env::remove_var("DEEPL_API_KEY") };
    let config = Config::default();

    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API key"));
}

/// Test validation passes with a key and rejects bad locale codes
#[test]
fn test_validate_withKeyAndBadLanguage_shouldCheckLocale() {
    let mut config = Config::default();
    for provider in &mut config.translation.available_providers {
        provider.api_key = "some-key".to_string();
    }

    assert!(config.validate().is_ok());

    config.source_language = "not-a-code".to_string();
    assert!(config.validate().is_err());
}

/// Test the source bundle path follows the messages dir and base language
#[test]
fn test_source_bundle_path_shouldJoinDirAndLocale() {
    let mut config = Config::default();
    config.messages_dir = "content/messages".to_string();

    assert_eq!(
        config.source_bundle_path(),
        std::path::PathBuf::from("content/messages/en.json")
    );
}
