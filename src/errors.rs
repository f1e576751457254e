/*!
 * Error types for the i18n-bundler application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation provider API.
///
/// These are leaf-level failures: the walker recovers from every one of
/// them by keeping the source string, so they never abort a run.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that abort a single per-locale run.
///
/// These propagate to the batch driver as a per-locale failure record;
/// the batch continues with the remaining locales.
#[derive(Error, Debug)]
pub enum BundleError {
    /// The active provider has no code-table entry for this locale
    #[error("locale '{0}' is not supported by this provider - use the alternate provider or manual translation")]
    UnsupportedLocale(String),

    /// The base-language bundle could not be read
    #[error("failed to read source bundle {path}: {source}")]
    SourceRead {
        /// Path of the source bundle
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The base-language bundle is not valid JSON
    #[error("failed to parse source bundle {path}: {source}")]
    SourceParse {
        /// Path of the source bundle
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The translated bundle could not be written
    #[error("failed to write output bundle {path}: {source}")]
    OutputWrite {
        /// Path of the output bundle
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    /// Whether this failure is the "unsupported by provider" outcome,
    /// which the batch summary reports in its own bucket.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedLocale(_))
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration problem, fatal before any locale is attempted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a per-locale bundle run
    #[error("Bundle error: {0}")]
    Bundle(#[from] BundleError),

    /// Error from a file operation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
