use anyhow::{Result, anyhow};
use isolang::Language;

/// Locale utilities for the site's locale set
///
/// The website ships one bundle per locale. Internal locale codes are
/// ISO 639-1 two-letter codes; the provider-specific codes (e.g. DeepL's
/// `PT-BR`, Google's `zh-CN`) live in each provider's code table, not here.
/// Every target locale of the site, in the order bundles are listed in
/// the messages directory. The base language ("en") is not included.
pub const SITE_LOCALES: [&str; 19] = [
    "uk", "ru", "be", "ka", "hi", "ro", "zh", "vi", "tr", "ne",
    "de", "es", "fr", "it", "ar", "pt", "ko", "ja", "th",
];

/// Validate that a locale code is a known ISO 639-1 code.
pub fn validate_locale_code(code: &str) -> Result<()> {
    let normalized = code.trim().to_lowercase();
    if normalized.len() == 2 && Language::from_639_1(&normalized).is_some() {
        return Ok(());
    }
    Err(anyhow!("Invalid locale code: {}", code))
}

/// English display name for a locale code, for log lines.
///
/// Falls back to the raw code when the code is unknown, so reporting
/// never fails over a cosmetic lookup.
pub fn display_name(code: &str) -> String {
    let normalized = code.trim().to_lowercase();
    Language::from_639_1(&normalized)
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// The site locales absent from the given supported set.
///
/// Used by the batch summary to point out which locales need the
/// alternate provider or manual translation.
pub fn unsupported_site_locales(supported: &[&str]) -> Vec<&'static str> {
    SITE_LOCALES.iter()
        .copied()
        .filter(|code| !supported.contains(code))
        .collect()
}
