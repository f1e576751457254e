/*!
 * Mock provider for tests and dry runs.
 *
 * Backed by an in-memory dictionary instead of the network, with call
 * tracking and failure injection so tests can exercise every leaf-level
 * outcome without external API calls.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::errors::ProviderError;
use super::Provider;

/// Tracks calls made against a mock provider
#[derive(Debug, Default)]
pub struct CallTracker {
    /// Number of translate calls made
    pub call_count: usize,
    /// Last (text, source, target) triple received
    pub last_request: Option<(String, String, String)>,
}

/// Dictionary-backed mock translation provider
#[derive(Debug)]
pub struct MockProvider {
    /// Source text -> translated text
    dictionary: HashMap<String, String>,
    /// Internal locale -> provider code table
    locales: Vec<(&'static str, &'static str)>,
    /// Fail every translate call when set
    fail_all: bool,
    /// Texts whose translation always fails
    fail_texts: Vec<String>,
    /// Shared call tracker
    tracker: Arc<Mutex<CallTracker>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create an identity-translating mock supporting a small locale table
    pub fn new() -> Self {
        Self {
            dictionary: HashMap::new(),
            locales: vec![("pl", "pl"), ("de", "de"), ("fr", "fr")],
            fail_all: false,
            fail_texts: Vec::new(),
            tracker: Arc::new(Mutex::new(CallTracker::default())),
        }
    }

    /// Add a dictionary entry
    pub fn with_translation(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        self.dictionary.insert(source.into(), translated.into());
        self
    }

    /// Replace the locale table
    pub fn with_locales(mut self, locales: Vec<(&'static str, &'static str)>) -> Self {
        self.locales = locales;
        self
    }

    /// Make every translate call fail
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Make translation of one specific text fail
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.fail_texts.push(text.into());
        self
    }

    /// Get the shared call tracker
    pub fn tracker(&self) -> Arc<Mutex<CallTracker>> {
        self.tracker.clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn resolve_locale(&self, locale: &str) -> Option<&'static str> {
        self.locales.iter()
            .find(|(code, _)| *code == locale)
            .map(|(_, provider_code)| *provider_code)
    }

    fn supported_locales(&self) -> Vec<&'static str> {
        self.locales.iter().map(|(code, _)| *code).collect()
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        {
            let mut tracker = self.tracker.lock().unwrap();
            tracker.call_count += 1;
            tracker.last_request = Some((text.to_string(), source.to_string(), target.to_string()));
        }

        if self.fail_all || self.fail_texts.iter().any(|t| t == text) {
            return Err(ProviderError::RequestFailed("mock failure".to_string()));
        }

        // Unknown texts translate to themselves so the mock doubles as an
        // identity provider for dry runs
        Ok(self.dictionary.get(text).cloned().unwrap_or_else(|| text.to_string()))
    }
}
