/*!
 * Translation services for message bundles.
 *
 * This module contains the bundle translation functionality:
 * - `translation::core`: the recursive tree walker
 * - `translation::rate_limit`: request pacing shared across provider calls
 */

// Re-export main types for easier usage
pub use self::core::{BundleTranslator, WalkStats};
pub use self::rate_limit::RateLimiter;

// Submodules
pub mod core;
pub mod rate_limit;
