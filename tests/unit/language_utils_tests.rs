/*!
 * Tests for locale utility functions
 */

use i18n_bundler::language_utils::{
    display_name, unsupported_site_locales, validate_locale_code, SITE_LOCALES,
};

/// Test validation of locale codes
#[test]
fn test_validate_locale_code_withValidCodes_shouldAccept() {
    assert!(validate_locale_code("en").is_ok());
    assert!(validate_locale_code("uk").is_ok());
    assert!(validate_locale_code(" DE ").is_ok());

    // Every site locale must validate
    for locale in SITE_LOCALES {
        assert!(validate_locale_code(locale).is_ok(), "rejected {}", locale);
    }

    // Invalid codes
    assert!(validate_locale_code("xx").is_err());
    assert!(validate_locale_code("eng").is_err());
    assert!(validate_locale_code("1").is_err());
}

/// Test display names fall back to the raw code for unknown inputs
#[test]
fn test_display_name_shouldNameKnownLocales() {
    assert_eq!(display_name("uk"), "Ukrainian");
    assert_eq!(display_name("de"), "German");
    assert_eq!(display_name("ja"), "Japanese");
    assert_eq!(display_name("zz"), "zz");
}

/// Test the unsupported-locale hint against a DeepL-shaped table
#[test]
fn test_unsupported_site_locales_shouldListMissingCodes() {
    let deepl_like = ["uk", "ru", "de", "es", "fr", "it", "pt", "zh", "ja", "ko", "ro", "tr"];
    let missing = unsupported_site_locales(&deepl_like);

    assert_eq!(missing, vec!["be", "ka", "hi", "vi", "ne", "ar", "th"]);
}

/// Test a full-coverage table leaves nothing unsupported
#[test]
fn test_unsupported_site_locales_withFullCoverage_shouldBeEmpty() {
    assert!(unsupported_site_locales(&SITE_LOCALES).is_empty());
}
