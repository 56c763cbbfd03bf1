// scrubchain-core/src/headless.rs
//! Convenience wrappers for one-shot filtering.
//!
//! Each call builds a fresh [`FilterEngine`] with only the built-in filters,
//! runs it once, and drops it. Callers that register extensions should keep an
//! engine of their own instead.

use crate::chain::{ChainSource, FilterInvocation};
use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::errors::ScrubError;
use crate::value::{dataset_from_json_str, dataset_to_json, Dataset, Value};

/// Filters a dataset with the chains and recursion setting from `config`.
pub fn headless_filter(data: Dataset, config: &FilterConfig) -> Result<Dataset, ScrubError> {
    let mut engine = FilterEngine::new();
    engine.configure_parsed(data, config.filter_spec(), config.recursive);
    engine.get_filtered()
}

/// Filters a JSON object and returns the result as pretty-printed JSON.
pub fn headless_filter_json(json: &str, config: &FilterConfig) -> Result<String, ScrubError> {
    let data = dataset_from_json_str(json)?;
    let filtered = headless_filter(data, config)?;
    Ok(serde_json::to_string_pretty(&dataset_to_json(&filtered))?)
}

/// Runs a single `|`-delimited chain over one text value.
pub fn headless_apply_chain(chain: &str, value: &str) -> Result<String, ScrubError> {
    let invocations: Vec<FilterInvocation> = ChainSource::from(chain).into_invocations();
    let out = FilterEngine::new().apply_chain(&Value::from(value), &invocations)?;
    Ok(out.to_string())
}
