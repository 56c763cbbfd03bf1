//! Filter chain parsing.
//!
//! A chain is written either as one string with `|` between filters
//! (`"trim|replace:a,b|upper"`) or as a sequence of filter strings. Each filter
//! string is `name` or `name:param1,param2`. Sequences may also carry already
//! structured invocations, which are used as given.
//!
//! License: MIT OR APACHE 2.0

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator between filters in a single-string chain.
pub const FILTER_DELIMITER: char = '|';
/// Separator between a filter name and its parameter list.
pub const PARAMS_DELIMITER: char = ':';
/// Separator between individual parameters.
pub const PARAM_SEPARATOR: char = ',';

/// One filter call inside a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInvocation {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl FilterInvocation {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Parses `name` or `name:p1,p2`.
    ///
    /// Only the first `:` separates name from parameters, so parameters may
    /// themselves contain colons. A trailing `:` yields no parameters.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(PARAMS_DELIMITER) {
            Some((name, list)) if list.is_empty() => Self::new(name, Vec::new()),
            Some((name, list)) => Self::new(
                name,
                list.split(PARAM_SEPARATOR).map(str::to_string).collect(),
            ),
            None => Self::new(raw, Vec::new()),
        }
    }
}

/// An element of a sequenced chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainItem {
    Raw(String),
    Invocation(FilterInvocation),
}

impl ChainItem {
    pub fn into_invocation(self) -> FilterInvocation {
        match self {
            ChainItem::Raw(raw) => FilterInvocation::parse(&raw),
            ChainItem::Invocation(invocation) => invocation,
        }
    }
}

impl From<&str> for ChainItem {
    fn from(s: &str) -> Self {
        ChainItem::Raw(s.to_string())
    }
}

impl From<FilterInvocation> for ChainItem {
    fn from(invocation: FilterInvocation) -> Self {
        ChainItem::Invocation(invocation)
    }
}

/// The source form of one field's chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainSource {
    Single(String),
    Sequence(Vec<ChainItem>),
}

impl ChainSource {
    /// Normalizes the chain into ordered invocations.
    pub fn into_invocations(self) -> Vec<FilterInvocation> {
        match self {
            ChainSource::Single(chain) => chain
                .split(FILTER_DELIMITER)
                .map(FilterInvocation::parse)
                .collect(),
            ChainSource::Sequence(items) => {
                items.into_iter().map(ChainItem::into_invocation).collect()
            }
        }
    }
}

impl From<&str> for ChainSource {
    fn from(s: &str) -> Self {
        ChainSource::Single(s.to_string())
    }
}

impl From<String> for ChainSource {
    fn from(s: String) -> Self {
        ChainSource::Single(s)
    }
}

impl<T: Into<ChainItem>> From<Vec<T>> for ChainSource {
    fn from(items: Vec<T>) -> Self {
        ChainSource::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Per-field chains as supplied by the caller.
pub type FilterSpecSource = IndexMap<String, ChainSource>;

/// Per-field chains after normalization.
pub type FilterSpec = IndexMap<String, Vec<FilterInvocation>>;

/// Normalizes every field's chain, keeping field order.
pub fn parse_filter_spec(source: FilterSpecSource) -> FilterSpec {
    source
        .into_iter()
        .map(|(field, chain)| (field, chain.into_invocations()))
        .collect()
}

/// Builds a [`FilterSpecSource`] from `(field, chain)` pairs.
///
/// ```
/// use scrubchain_core::chain::{filter_spec, ChainSource};
///
/// let spec = filter_spec([("name", ChainSource::from("trim|ucwords"))]);
/// assert_eq!(spec.len(), 1);
/// ```
pub fn filter_spec<K, I>(pairs: I) -> FilterSpecSource
where
    K: Into<String>,
    I: IntoIterator<Item = (K, ChainSource)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
