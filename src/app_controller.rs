use log::{error, warn, info};
use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::{Config, TranslationProvider};
use crate::errors::{AppError, BundleError};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::message_tree::MessageNode;
use crate::providers::Provider;
use crate::providers::deepl::DeepL;
use crate::providers::google::GoogleTranslate;
use crate::translation::{BundleTranslator, RateLimiter, WalkStats};

// @module: Batch driver for per-locale bundle generation

/// Result of one successful per-locale run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Internal locale code the bundle was written for
    pub locale: String,
    /// Provider-specific language code the run resolved to
    pub provider_code: String,
    /// Leaf counters accumulated during the walk
    pub stats: WalkStats,
}

/// Outcome of a whole batch invocation
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Locales whose bundles were written
    pub succeeded: Vec<RunReport>,
    /// Locales the active provider has no code for
    pub unsupported: Vec<String>,
    /// Locales whose run failed, with the causing error
    pub failed: Vec<(String, String)>,
    /// Wall-clock time for the batch
    pub elapsed: Duration,
}

impl BatchReport {
    /// Whether every requested locale produced a bundle
    pub fn all_succeeded(&self) -> bool {
        self.unsupported.is_empty() && self.failed.is_empty()
    }
}

/// Main application controller for bundle translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Active translation provider
    provider: Arc<dyn Provider>,
    // @field: Pacing shared by every provider call in the batch
    limiter: Arc<RateLimiter>,
}

impl Controller {
    // @method: Create a controller with the given configuration
    //
    // Validates the configuration (including the API key requirement)
    // before any locale is attempted and builds the active provider client.
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate().map_err(|e| AppError::Config(e.to_string()))?;

        let api_key = config.translation.get_api_key();
        let endpoint = config.translation.get_endpoint();
        let timeout_secs = config.translation.get_timeout_secs();

        let provider: Arc<dyn Provider> = match config.translation.provider {
            TranslationProvider::DeepL => Arc::new(DeepL::new(api_key, endpoint, timeout_secs)),
            TranslationProvider::Google => Arc::new(GoogleTranslate::new(api_key, endpoint, timeout_secs)),
        };

        Ok(Self::with_provider(config, provider))
    }

    /// Create a controller around an injected provider.
    ///
    /// Used by dry runs and tests; skips API-key validation because the
    /// provider needs no credentials.
    pub fn with_provider(config: Config, provider: Arc<dyn Provider>) -> Self {
        let limiter = Arc::new(RateLimiter::from_millis(config.translation.get_delay_ms()));
        Self { config, provider, limiter }
    }

    /// The active provider
    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    /// Generate the bundle for one locale.
    ///
    /// Reads the base-language bundle fresh, walks it, and persists the
    /// result atomically to `<messages_dir>/<locale>.json`. Either the
    /// full isomorphic bundle lands on disk or nothing does.
    pub async fn run_for_locale(&self, locale: &str) -> Result<RunReport, BundleError> {
        let provider_code = self.provider.resolve_locale(locale)
            .ok_or_else(|| BundleError::UnsupportedLocale(locale.to_string()))?;

        info!(
            "Translating to {} ({} -> {})...",
            language_utils::display_name(locale),
            locale,
            provider_code
        );

        let source_path = self.config.source_bundle_path();
        let source_text = fs::read_to_string(&source_path).map_err(|e| BundleError::SourceRead {
            path: source_path.display().to_string(),
            source: e,
        })?;
        let source_value: serde_json::Value =
            serde_json::from_str(&source_text).map_err(|e| BundleError::SourceParse {
                path: source_path.display().to_string(),
                source: e,
            })?;
        let source_tree = MessageNode::from_value(source_value);

        let total = source_tree.count_leaves();
        info!("Total strings to translate: {}", total);

        let progress_bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);
        progress_bar.set_message(locale.to_string());

        let translator = BundleTranslator::new(
            self.provider.clone(),
            self.limiter.clone(),
            self.config.source_language.clone(),
        );

        let bar = progress_bar.clone();
        let on_leaf = move |stats: &WalkStats| {
            bar.set_position(stats.attempted() as u64);
        };
        let (translated, stats) = translator
            .translate_tree(&source_tree, provider_code, &on_leaf)
            .await;
        progress_bar.finish_and_clear();

        if stats.failed > 0 {
            warn!(
                "{} of {} strings kept their source text after provider errors",
                stats.failed, stats.total
            );
        }

        // Output is named by the internal locale code, never the provider code
        let output_path = FileManager::bundle_path(&self.config.messages_dir, locale);
        let rendered = serde_json::to_string_pretty(&translated.to_value())
            .map_err(|e| BundleError::OutputWrite {
                path: output_path.display().to_string(),
                source: std::io::Error::other(e),
            })?;
        FileManager::write_atomic(&output_path, &rendered).map_err(|e| BundleError::OutputWrite {
            path: output_path.display().to_string(),
            source: e,
        })?;

        info!("Translation complete! Saved to {}", output_path.display());

        Ok(RunReport {
            locale: locale.to_string(),
            provider_code: provider_code.to_string(),
            stats,
        })
    }

    /// Run the batch for the requested locales, sequentially.
    ///
    /// An empty list means every locale the active provider supports.
    /// One locale's failure never halts the remaining locales.
    pub async fn run_batch(&self, locales: &[String]) -> BatchReport {
        let locales: Vec<String> = if locales.is_empty() {
            self.provider.supported_locales().into_iter().map(String::from).collect()
        } else {
            locales.to_vec()
        };

        info!(
            "Translating {} locale(s) with {}",
            locales.len(),
            self.provider.name()
        );

        let start = Instant::now();
        let mut report = BatchReport::default();

        for locale in &locales {
            match self.run_for_locale(locale).await {
                Ok(run) => report.succeeded.push(run),
                Err(e) if e.is_unsupported() => {
                    warn!("Skipping {}: {}", locale, e);
                    report.unsupported.push(locale.clone());
                },
                Err(e) => {
                    error!("Failed to translate {}: {}", locale, e);
                    report.failed.push((locale.clone(), e.to_string()));
                },
            }
        }

        report.elapsed = start.elapsed();
        report
    }

    /// Log the final batch tally
    pub fn log_summary(&self, report: &BatchReport) {
        info!("Translation Summary");
        info!("  Succeeded: {} locale(s)", report.succeeded.len());
        if !report.unsupported.is_empty() {
            info!(
                "  Unsupported by {}: {}",
                self.provider.name(),
                report.unsupported.join(", ")
            );
        }
        if !report.failed.is_empty() {
            info!("  Failed: {} locale(s)", report.failed.len());
            for (locale, cause) in &report.failed {
                info!("    {}: {}", locale, cause);
            }
        }
        info!("  Total time: {:.1}s", report.elapsed.as_secs_f64());

        let supported = self.provider.supported_locales();
        let missing = language_utils::unsupported_site_locales(&supported);
        if !missing.is_empty() {
            info!(
                "Site locales not covered by {} (use the alternate provider or manual translation): {}",
                self.provider.name(),
                missing.join(", ")
            );
        }
    }
}
