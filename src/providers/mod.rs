/*!
 * Provider implementations for the translation services.
 *
 * This module contains client implementations for the supported machine
 * translation providers:
 * - DeepL: DeepL REST API (v2)
 * - Google: Google Cloud Translation API (v2)
 * - Mock: in-process provider for tests and dry runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// The trait is object safe so the batch driver can hold the active
/// provider behind `Arc<dyn Provider>` and swap implementations from
/// configuration.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Lowercase provider identifier, for log lines
    fn name(&self) -> &'static str;

    /// Resolve an internal locale code against this provider's code table
    ///
    /// # Returns
    /// * `Some(code)` - The provider-specific language code
    /// * `None` - The locale is not supported by this provider
    fn resolve_locale(&self, locale: &str) -> Option<&'static str>;

    /// Every internal locale code this provider's table knows, in table order
    ///
    /// This is the default batch set when the caller does not name
    /// explicit locales.
    fn supported_locales(&self) -> Vec<&'static str>;

    /// Translate a single string leaf
    ///
    /// # Arguments
    /// * `text` - The source text
    /// * `source` - Source language code (provider-specific)
    /// * `target` - Target language code (provider-specific)
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error.
    ///   No retries happen at this layer; an error is terminal for the leaf.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError>;
}

pub mod deepl;
pub mod google;
pub mod mock;
