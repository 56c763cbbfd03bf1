//! errors.rs - Custom error types for the scrubchain-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `scrubchain-core` library.
///
/// Every variant aborts the run that produced it; the engine never hands back
/// a partially filtered dataset alongside an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    /// A chain element named a filter that is neither built in nor registered.
    #[error("'{0}' is not a valid filter.")]
    UnknownFilter(String),

    /// A direct extension call named an extension that was never registered.
    #[error("Filter extension '{0}' does not exist.")]
    UnknownExtension(String),

    /// A text-only filter was handed a list or a map as a whole.
    #[error("Filter '{filter}' expects a text value but received a {kind}.")]
    NotText { filter: String, kind: &'static str },

    #[error("Filter '{filter}' expects at least {expected} parameter(s), {given} given.")]
    MissingParameter {
        filter: String,
        expected: usize,
        given: usize,
    },

    /// Errors raised by user extensions pass through with their own message.
    #[error(transparent)]
    Extension(#[from] anyhow::Error),

    #[error("Invalid filter configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
