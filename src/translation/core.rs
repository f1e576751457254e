/*!
 * Core bundle translation functionality.
 *
 * The walker takes a source `MessageNode` tree and produces the
 * structurally identical tree for one target locale, translating leaves
 * depth first and bottom up. A failed leaf keeps its source text; nothing
 * a single leaf does can abort the walk or disturb sibling results.
 */

use std::sync::Arc;
use futures::future::BoxFuture;
use log::debug;

use crate::message_tree::MessageNode;
use crate::providers::Provider;
use super::rate_limit::RateLimiter;

/// Progress accumulator for one locale run.
///
/// Owned by the walk and returned with its result, so nothing is shared
/// between runs and a future parallel batch stays safe.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WalkStats {
    /// Leaves translated successfully
    pub translated: usize,
    /// Leaves that fell back to the source text
    pub failed: usize,
    /// Total string leaves in the source document
    pub total: usize,
}

impl WalkStats {
    /// Leaves attempted so far
    pub fn attempted(&self) -> usize {
        self.translated + self.failed
    }
}

/// Translates one message tree per call, pacing every provider request
/// through a shared rate limiter.
pub struct BundleTranslator {
    /// The active translation provider
    provider: Arc<dyn Provider>,
    /// Pacing for provider calls, applied uniformly before each one
    limiter: Arc<RateLimiter>,
    /// Provider-facing source language code
    source_language: String,
}

impl BundleTranslator {
    /// Create a new bundle translator
    pub fn new(provider: Arc<dyn Provider>, limiter: Arc<RateLimiter>, source_language: impl Into<String>) -> Self {
        Self {
            provider,
            limiter,
            source_language: source_language.into(),
        }
    }

    /// Translate a whole tree into the target language.
    ///
    /// `on_leaf` fires after every attempted leaf with the stats so far;
    /// the caller uses it to drive progress display. The returned tree is
    /// shape-identical to the input for any mix of leaf outcomes.
    pub async fn translate_tree(
        &self,
        source: &MessageNode,
        target: &str,
        on_leaf: &(dyn Fn(&WalkStats) + Sync),
    ) -> (MessageNode, WalkStats) {
        let mut stats = WalkStats {
            total: source.count_leaves(),
            ..WalkStats::default()
        };

        let translated = self.walk(source, target, &mut stats, on_leaf).await;
        (translated, stats)
    }

    /// Recursive walk; boxed because async recursion needs an indirection.
    fn walk<'a>(
        &'a self,
        node: &'a MessageNode,
        target: &'a str,
        stats: &'a mut WalkStats,
        on_leaf: &'a (dyn Fn(&WalkStats) + Sync),
    ) -> BoxFuture<'a, MessageNode> {
        Box::pin(async move {
            match node {
                MessageNode::Leaf(text) => {
                    self.limiter.acquire().await;
                    let result = match self.provider.translate(text, &self.source_language, target).await {
                        Ok(translated) => {
                            stats.translated += 1;
                            MessageNode::Leaf(translated)
                        },
                        Err(e) => {
                            // Keep the source string; the leaf failure is
                            // terminal here, retries belong to the provider
                            let preview: String = text.chars().take(50).collect();
                            debug!("Leaf translation failed for \"{}\": {}", preview, e);
                            stats.failed += 1;
                            MessageNode::Leaf(text.clone())
                        },
                    };
                    on_leaf(stats);
                    result
                },
                MessageNode::Sequence(items) => {
                    let mut translated = Vec::with_capacity(items.len());
                    for item in items {
                        translated.push(self.walk(item, target, stats, on_leaf).await);
                    }
                    MessageNode::Sequence(translated)
                },
                MessageNode::Mapping(entries) => {
                    let mut translated = Vec::with_capacity(entries.len());
                    for (key, value) in entries {
                        let value = self.walk(value, target, stats, on_leaf).await;
                        translated.push((key.clone(), value));
                    }
                    MessageNode::Mapping(translated)
                },
                MessageNode::Scalar(value) => MessageNode::Scalar(value.clone()),
            }
        })
    }
}
