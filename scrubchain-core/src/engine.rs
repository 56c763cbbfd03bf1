// scrubchain-core/src/engine.rs
//! The filter-chain execution engine.
//!
//! A [`FilterEngine`] is configured with a dataset and per-field filter chains,
//! then asked for the filtered result. It owns the extension registry, so
//! extensions registered once stay available to every later run on the same
//! instance. Name resolution tries the built-in table first and the registry
//! second; both end up behind [`ResolvedFilter`], so chain execution does not
//! care where a filter came from.
//!
//! License: MIT OR APACHE 2.0

use indexmap::IndexMap;
use log::{debug, info};
use std::sync::Arc;

use crate::chain::{parse_filter_spec, FilterInvocation, FilterSpec, FilterSpecSource};
use crate::errors::ScrubError;
use crate::filters::ascii_fold::{AsciiFold, DefaultAsciiFold};
use crate::filters::{canonical_name, BuiltinFilter};
use crate::log_values::loggable;
use crate::registry::{ExtensionRegistry, Filter};
use crate::value::{Dataset, Value};

/// A filter name resolved to something callable.
#[derive(Clone, Copy)]
pub enum ResolvedFilter<'a> {
    Builtin(BuiltinFilter),
    Extension(&'a dyn Filter),
}

/// Configures and runs filter chains over a dataset.
///
/// ```
/// use scrubchain_core::{FilterEngine, Dataset, Value};
/// use scrubchain_core::chain::{filter_spec, ChainSource};
///
/// let mut data = Dataset::new();
/// data.insert("name".to_string(), Value::from(" jane doe "));
///
/// let mut engine = FilterEngine::new();
/// engine.make(data, filter_spec([("name", ChainSource::from("trim|ucwords"))]));
///
/// let filtered = engine.get_filtered().unwrap();
/// assert_eq!(filtered["name"], Value::from("Jane Doe"));
/// ```
#[derive(Clone)]
pub struct FilterEngine {
    data: Dataset,
    filters: FilterSpec,
    recursive: bool,
    extensions: ExtensionRegistry,
    folder: Arc<dyn AsciiFold>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {
            data: Dataset::new(),
            filters: FilterSpec::new(),
            recursive: true,
            extensions: ExtensionRegistry::new(),
            folder: Arc::new(DefaultAsciiFold),
        }
    }

    /// Replaces the transliteration used by the `ascii` and `slug` built-ins.
    pub fn with_ascii_fold(mut self, folder: Arc<dyn AsciiFold>) -> Self {
        self.folder = folder;
        self
    }

    /// Shorthand for [`FilterEngine::configure`] with recursion enabled.
    pub fn make(&mut self, data: Dataset, filters: FilterSpecSource) -> &mut Self {
        self.configure(data, filters, true)
    }

    /// Stores the dataset and chains for the next run.
    ///
    /// Single-string chains are split on `|`; sequenced chains are taken as
    /// given. Anything from a previous configuration is discarded; the
    /// extension registry is kept.
    pub fn configure(
        &mut self,
        data: Dataset,
        filters: FilterSpecSource,
        recursive: bool,
    ) -> &mut Self {
        self.configure_parsed(data, parse_filter_spec(filters), recursive)
    }

    /// Like [`FilterEngine::configure`] for chains that are already parsed.
    pub fn configure_parsed(
        &mut self,
        data: Dataset,
        filters: FilterSpec,
        recursive: bool,
    ) -> &mut Self {
        debug!(
            "Configured engine: {} field(s), {} chain(s), recursive={}.",
            data.len(),
            filters.len(),
            recursive
        );
        self.data = data;
        self.filters = filters;
        self.recursive = recursive;
        self
    }

    /// Runs every chain and returns the full dataset with filtered values in place.
    ///
    /// Fields without a chain keep their original value; chains for fields that
    /// are not in the dataset are skipped. The result is recomputed on each call.
    pub fn get_filtered(&self) -> Result<Dataset, ScrubError> {
        let mut replacements = self.filter()?;
        let merged: Dataset = self
            .data
            .iter()
            .map(|(field, value)| {
                let value = replacements
                    .swap_remove(field)
                    .unwrap_or_else(|| value.clone());
                (field.clone(), value)
            })
            .collect();
        info!(
            "Filtered {} of {} field(s).",
            self.filters
                .keys()
                .filter(|field| self.data.contains_key(*field))
                .count(),
            self.data.len()
        );
        Ok(merged)
    }

    /// The dataset exactly as it was configured.
    pub fn get_original(&self) -> &Dataset {
        &self.data
    }

    /// The parsed chains, keyed by field.
    pub fn filter_spec(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Registers a text extension under `name`, replacing any previous one.
    ///
    /// The closure receives the value and the chain parameters. It is not
    /// checked for arity; a closure that needs parameters should return an
    /// error when they are missing.
    pub fn register_extension<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&str, &[String]) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.extensions.register_text(name, func);
    }

    /// Registers an extension that receives lists and maps whole when it is
    /// applied without recursion.
    pub fn register_value_extension<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&Value, &[String]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.extensions.register_value(name, func);
    }

    pub fn register_filter(&mut self, name: &str, filter: Arc<dyn Filter>) {
        self.extensions.register(name, filter);
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// Calls a registered extension directly, with no parameters.
    ///
    /// Only extensions are consulted here; built-ins are plain functions in
    /// [`crate::filters`].
    pub fn invoke_extension(
        &self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Value, ScrubError> {
        let key = canonical_name(name);
        let filter = self
            .extensions
            .get(&key)
            .ok_or(ScrubError::UnknownExtension(key))?;
        filter.apply(&value.into(), &[])
    }

    /// Resolves a chain filter name, built-ins first.
    pub fn resolve(&self, name: &str) -> Result<ResolvedFilter<'_>, ScrubError> {
        if let Some(builtin) = BuiltinFilter::lookup(name) {
            return Ok(ResolvedFilter::Builtin(builtin));
        }
        self.extensions
            .get(name)
            .map(ResolvedFilter::Extension)
            .ok_or_else(|| ScrubError::UnknownFilter(name.to_string()))
    }

    /// Threads one value through a chain, left to right.
    pub fn apply_chain(
        &self,
        value: &Value,
        chain: &[FilterInvocation],
    ) -> Result<Value, ScrubError> {
        let mut current = value.clone();
        for invocation in chain {
            let resolved = self.resolve(&invocation.name)?;
            current = self.walk(resolved, &current, &invocation.params)?;
            debug!(
                "Applied filter '{}' -> {}",
                invocation.name,
                loggable(&current)
            );
        }
        Ok(current)
    }

    fn filter(&self) -> Result<IndexMap<String, Value>, ScrubError> {
        let mut replacements = IndexMap::with_capacity(self.filters.len());
        for (field, chain) in &self.filters {
            let Some(value) = self.data.get(field) else {
                debug!("Field '{}' is not in the dataset, skipping its chain.", field);
                continue;
            };
            debug!(
                "Filtering field '{}' ({} filter(s)), input {}",
                field,
                chain.len(),
                loggable(value)
            );
            let filtered = self.apply_chain(value, chain)?;
            replacements.insert(field.clone(), filtered);
        }
        Ok(replacements)
    }

    /// Applies one filter, element-wise over a collection when recursive.
    fn walk(
        &self,
        filter: ResolvedFilter<'_>,
        value: &Value,
        params: &[String],
    ) -> Result<Value, ScrubError> {
        if !self.recursive {
            return self.apply_one(filter, value, params);
        }
        match value {
            Value::List(items) => items
                .iter()
                .map(|item| self.apply_one(filter, item, params))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Value::Map(map) => map
                .iter()
                .map(|(key, item)| Ok((key.clone(), self.apply_one(filter, item, params)?)))
                .collect::<Result<IndexMap<_, _>, ScrubError>>()
                .map(Value::Map),
            Value::Text(_) | Value::Scalar(_) => self.apply_one(filter, value, params),
        }
    }

    fn apply_one(
        &self,
        filter: ResolvedFilter<'_>,
        value: &Value,
        params: &[String],
    ) -> Result<Value, ScrubError> {
        match filter {
            ResolvedFilter::Builtin(builtin) => {
                let text = value.text_form().ok_or_else(|| ScrubError::NotText {
                    filter: builtin.name().to_string(),
                    kind: value.kind(),
                })?;
                builtin
                    .apply(&text, params, self.folder.as_ref())
                    .map(Value::Text)
            }
            ResolvedFilter::Extension(extension) => extension.apply(value, params),
        }
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("fields", &self.data.len())
            .field("chains", &self.filters.len())
            .field("recursive", &self.recursive)
            .field("extensions", &self.extensions)
            .finish()
    }
}
