//! Configuration management for `scrubchain-core`.
//!
//! A [`FilterConfig`] names the chains to run per field and whether collections
//! are filtered element by element. It is read from YAML, validated on load,
//! and can be layered: a user file over a default file, field by field.
//!
//! ```yaml
//! recursive: true
//! filters:
//!   name: trim|ucwords
//!   website: [trim, prep_url]
//!   tags:
//!     - name: replace
//!       params: ["_", "-"]
//! ```
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chain::{parse_filter_spec, ChainSource, FilterSpec, FilterSpecSource};
use crate::errors::ScrubError;

/// File name looked up in the candidate configuration directories.
pub const CONFIG_FILE_NAME: &str = "filters.yaml";

/// Represents the top-level filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Apply filters to each element of list and map values.
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    /// Chains per field, in the order they were written.
    #[serde(default)]
    pub filters: FilterSpecSource,
}

fn default_recursive() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            filters: FilterSpecSource::new(),
        }
    }
}

impl FilterConfig {
    /// Loads and validates a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!(
            "Loaded chains for {} field(s) from {}.",
            config.filters.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parses and validates a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScrubError> {
        let config: FilterConfig = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field and every filter in every chain has a name.
    ///
    /// All problems are collected and reported in one error.
    pub fn validate(&self) -> Result<(), ScrubError> {
        let mut errors = Vec::new();
        for (field, chain) in &self.filters {
            if field.trim().is_empty() {
                errors.push("A chain is attached to an empty field name.".to_string());
            }
            let invocations = chain.clone().into_invocations();
            if invocations.is_empty() {
                warn!("Field '{}' has an empty chain; it will pass through unchanged.", field);
            }
            for (position, invocation) in invocations.iter().enumerate() {
                if invocation.name.trim().is_empty() {
                    errors.push(format!(
                        "Field '{}': filter #{} has an empty name.",
                        field,
                        position + 1
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScrubError::Config(format!(
                "Filter validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }

    /// Adds or replaces the chain for one field.
    pub fn set_chain(&mut self, field: impl Into<String>, chain: ChainSource) {
        self.filters.insert(field.into(), chain);
    }

    /// Normalized chains, ready for [`crate::FilterEngine::configure_parsed`].
    pub fn filter_spec(&self) -> FilterSpec {
        parse_filter_spec(self.filters.clone())
    }
}

/// Layers a user configuration over a default one.
///
/// A field chain in the user config replaces the default chain for that field;
/// fields only the user config names are appended in its order. The user's
/// `recursive` setting wins.
pub fn merge_configs(default_config: FilterConfig, user_config: Option<FilterConfig>) -> FilterConfig {
    debug!(
        "merge_configs called. Default chains: {}",
        default_config.filters.len()
    );
    let Some(user_cfg) = user_config else {
        return default_config;
    };

    let mut merged = default_config.filters;
    for (field, chain) in user_cfg.filters {
        if merged.insert(field.clone(), chain).is_some() {
            debug!("User config overrides the chain for field '{}'.", field);
        }
    }
    debug!("Final chain count after merge: {}", merged.len());

    FilterConfig {
        recursive: user_cfg.recursive,
        filters: merged,
    }
}

/// Locations searched for a configuration file when none is given explicitly.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".scrubchain")),
        dirs::config_dir().map(|p| p.join("scrubchain")),
    ];
    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect()
}

/// Loads the first configuration file found among [`config_candidate_paths`].
pub fn load_default_config() -> Result<Option<FilterConfig>> {
    for path in config_candidate_paths() {
        if path.is_file() {
            debug!("Found configuration at: {}", path.display());
            return FilterConfig::load_from_file(&path).map(Some);
        }
        debug!("No configuration at: {}", path.display());
    }
    Ok(None)
}
