/*!
 * # i18n-bundler
 *
 * A Rust utility for generating translated message bundles for a
 * multilingual static website.
 *
 * ## Features
 *
 * - Read the base-language bundle (`messages/en.json`) as an ordered JSON tree
 * - Translate every string leaf via a machine-translation provider:
 *   - DeepL API
 *   - Google Cloud Translation (v2)
 * - Preserve document shape exactly: key order, array order, untouched scalars
 * - Per-leaf failure tolerance (failed leaves keep their source text)
 * - Uniform request pacing to stay under provider rate limits
 * - Sequential batch runs across locales with a succeeded/unsupported/failed tally
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `message_tree`: The ordered bundle document model
 * - `translation`: Bundle translation services:
 *   - `translation::core`: the recursive tree walker
 *   - `translation::rate_limit`: request pacing
 * - `file_utils`: File system operations
 * - `app_controller`: Per-locale runs and the batch driver
 * - `language_utils`: Locale code utilities
 * - `providers`: Clients for the translation providers:
 *   - `providers::deepl`: DeepL API client
 *   - `providers::google`: Google Translate API client
 *   - `providers::mock`: in-process provider for tests and dry runs
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod message_tree;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchReport, Controller, RunReport};
pub use errors::{AppError, BundleError, ProviderError};
pub use message_tree::MessageNode;
pub use translation::{BundleTranslator, RateLimiter, WalkStats};
