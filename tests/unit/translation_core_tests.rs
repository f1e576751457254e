/*!
 * Tests for the recursive bundle walker
 */

use std::sync::Arc;
use serde_json::json;

use i18n_bundler::message_tree::MessageNode;
use i18n_bundler::providers::mock::MockProvider;
use i18n_bundler::translation::{BundleTranslator, RateLimiter, WalkStats};

fn translator_for(mock: MockProvider) -> BundleTranslator {
    BundleTranslator::new(Arc::new(mock), Arc::new(RateLimiter::from_millis(0)), "en")
}

fn no_progress(_: &WalkStats) {}

/// Test the end-to-end example: a dictionary-backed stub produces the
/// expected Polish bundle with the shape intact
#[tokio::test]
async fn test_translate_tree_withDictionaryStub_shouldTranslateEveryLeaf() {
    let mock = MockProvider::new()
        .with_translation("Home", "Strona główna")
        .with_translation("One", "Jeden")
        .with_translation("Two", "Dwa");
    let translator = translator_for(mock);

    let source = MessageNode::from_value(json!({
        "common": { "home": "Home" },
        "items": ["One", "Two"]
    }));

    let (translated, stats) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert_eq!(translated.to_value(), json!({
        "common": { "home": "Strona główna" },
        "items": ["Jeden", "Dwa"]
    }));
    assert_eq!(stats.translated, 3);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.total, 3);
}

/// Test fallback correctness: when every provider call fails, the output
/// is leaf-for-leaf identical to the input
#[tokio::test]
async fn test_translate_tree_withAlwaysFailingProvider_shouldReturnInputUnchanged() {
    let translator = translator_for(MockProvider::new().failing());

    let source = MessageNode::from_value(json!({
        "a": "one",
        "b": { "c": ["two", "three"], "d": null },
        "e": 7
    }));

    let (translated, stats) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert_eq!(translated, source);
    assert_eq!(stats.translated, 0);
    assert_eq!(stats.failed, 3);
}

/// Test structural isomorphism under a mix of per-leaf outcomes
#[tokio::test]
async fn test_translate_tree_withPartialFailures_shouldKeepShapeAndSiblings() {
    let mock = MockProvider::new()
        .with_translation("alpha", "ALPHA")
        .with_translation("gamma", "GAMMA")
        .failing_on("beta");
    let translator = translator_for(mock);

    let source = MessageNode::from_value(json!({
        "first": "alpha",
        "second": ["beta", "gamma"],
        "third": { "n": 1 }
    }));

    let (translated, stats) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert!(translated.is_isomorphic_to(&source));
    assert_eq!(translated.to_value(), json!({
        "first": "ALPHA",
        "second": ["beta", "GAMMA"],
        "third": { "n": 1 }
    }));
    assert_eq!(stats.translated, 2);
    assert_eq!(stats.failed, 1);
}

/// Test count consistency: the provider sees exactly count_leaves calls
#[tokio::test]
async fn test_translate_tree_shouldCallProviderOncePerLeaf() {
    let mock = MockProvider::new();
    let tracker = mock.tracker();
    let translator = translator_for(mock);

    let source = MessageNode::from_value(json!({
        "a": "x",
        "b": ["y", { "c": "z" }],
        "d": { "e": true, "f": "w" }
    }));
    let leaves = source.count_leaves();

    let (_, stats) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert_eq!(leaves, 4);
    assert_eq!(tracker.lock().unwrap().call_count, leaves);
    assert_eq!(stats.attempted(), leaves);
}

/// Test idempotence under identity translation
#[tokio::test]
async fn test_translate_tree_withIdentityProvider_shouldEqualInput() {
    // The mock translates unknown texts to themselves
    let translator = translator_for(MockProvider::new());

    let source = MessageNode::from_value(json!({
        "greeting": "Hello",
        "nested": { "deep": [["leaf"]] }
    }));

    let (translated, stats) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert_eq!(translated, source);
    assert_eq!(stats.failed, 0);
}

/// Test that key order survives translation
#[tokio::test]
async fn test_translate_tree_shouldPreserveKeyOrder() {
    let translator = translator_for(MockProvider::new());

    let raw = r#"{"zulu":"Z","alpha":"A","nested":{"beta":"B","aleph":"A"}}"#;
    let source = MessageNode::from_value(serde_json::from_str(raw).unwrap());

    let (translated, _) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert_eq!(serde_json::to_string(&translated.to_value()).unwrap(), raw);
}

/// Test the progress callback fires once per leaf with growing counts
#[tokio::test]
async fn test_translate_tree_shouldReportProgressPerLeaf() {
    use std::sync::Mutex;

    let translator = translator_for(MockProvider::new());
    let source = MessageNode::from_value(json!(["a", "b", "c"]));

    let seen: Mutex<Vec<usize>> = Mutex::new(Vec::new());
    let on_leaf = |stats: &WalkStats| {
        seen.lock().unwrap().push(stats.attempted());
    };

    let _ = translator.translate_tree(&source, "pl", &on_leaf).await;

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
}

/// Test that an empty document walks cleanly
#[tokio::test]
async fn test_translate_tree_withEmptyDocument_shouldProduceEmptyDocument() {
    let translator = translator_for(MockProvider::new());
    let source = MessageNode::from_value(json!({}));

    let (translated, stats) = translator.translate_tree(&source, "pl", &no_progress).await;

    assert_eq!(translated.to_value(), json!({}));
    assert_eq!(stats.total, 0);
    assert_eq!(stats.attempted(), 0);
}
