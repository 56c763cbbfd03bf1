//! Extension filters registered by the caller.
//!
//! Extensions sit behind the [`Filter`] trait. Text closures are the common
//! case and are wrapped by [`ExtensionRegistry::register_text`]; closures that
//! need to see whole lists or maps go through
//! [`ExtensionRegistry::register_value`].
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ScrubError;
use crate::filters::canonical_name;
use crate::value::Value;

/// A transformer that can be registered by name and called from a chain.
///
/// `params` are the chain parameters, in order, after the value.
pub trait Filter: Send + Sync {
    fn apply(&self, value: &Value, params: &[String]) -> Result<Value, ScrubError>;
}

/// Wraps a text closure; scalars arrive in text form, collections handed to it
/// whole are rejected.
struct TextExtension<F> {
    name: String,
    func: F,
}

impl<F> Filter for TextExtension<F>
where
    F: Fn(&str, &[String]) -> anyhow::Result<String> + Send + Sync,
{
    fn apply(&self, value: &Value, params: &[String]) -> Result<Value, ScrubError> {
        let text = value.text_form().ok_or_else(|| ScrubError::NotText {
            filter: self.name.clone(),
            kind: value.kind(),
        })?;
        Ok(Value::Text((self.func)(&text, params)?))
    }
}

struct ValueExtension<F>(F);

impl<F> Filter for ValueExtension<F>
where
    F: Fn(&Value, &[String]) -> anyhow::Result<Value> + Send + Sync,
{
    fn apply(&self, value: &Value, params: &[String]) -> Result<Value, ScrubError> {
        Ok((self.0)(value, params)?)
    }
}

/// Named extension filters, keyed by their snake_case name.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    extensions: HashMap<String, Arc<dyn Filter>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers any [`Filter`], replacing an existing entry with the same
    /// canonical name.
    pub fn register(&mut self, name: &str, filter: Arc<dyn Filter>) {
        let key = canonical_name(name);
        if self.extensions.insert(key.clone(), filter).is_some() {
            debug!("Replaced extension filter '{}'.", key);
        } else {
            debug!("Registered extension filter '{}'.", key);
        }
    }

    pub fn register_text<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&str, &[String]) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        let filter = TextExtension {
            name: canonical_name(name),
            func,
        };
        self.register(name, Arc::new(filter));
    }

    pub fn register_value<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&Value, &[String]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(ValueExtension(func)));
    }

    /// Finds an extension by any spelling that normalizes to its key.
    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.extensions.get(&canonical_name(name)).map(Arc::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extensions.contains_key(&canonical_name(name))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.extensions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("extensions", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_register_and_lookup_any_spelling() {
        let mut registry = ExtensionRegistry::new();
        registry.register_text("custom_filter", |_, _| Ok("test-string".to_string()));

        assert!(registry.contains("customFilter"));
        assert!(registry.contains("CustomFilter"));
        let filter = registry.get("customFilter").unwrap();
        assert_eq!(
            filter.apply(&Value::from("x"), &[]).unwrap(),
            Value::from("test-string")
        );
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = ExtensionRegistry::new();
        registry.register_text("f", |_, _| Ok("one".to_string()));
        registry.register_text("f", |_, _| Ok("two".to_string()));
        assert_eq!(registry.len(), 1);
        let out = registry.get("f").unwrap().apply(&Value::from(""), &[]).unwrap();
        assert_eq!(out, Value::from("two"));
    }

    #[test]
    fn test_text_extension_rejects_collections() {
        let mut registry = ExtensionRegistry::new();
        registry.register_text("shout", |s, _| Ok(s.to_uppercase()));
        let err = registry
            .get("shout")
            .unwrap()
            .apply(&Value::from(vec!["a"]), &[])
            .unwrap_err();
        assert!(matches!(err, ScrubError::NotText { kind: "list", .. }));
    }

    #[test]
    fn test_extension_errors_pass_through_unchanged() {
        let mut registry = ExtensionRegistry::new();
        registry.register_text("picky", |_, params| {
            if params.len() != 2 {
                return Err(anyhow!("picky expects 2 parameters, got {}", params.len()));
            }
            Ok(String::new())
        });
        let err = registry
            .get("picky")
            .unwrap()
            .apply(&Value::from("x"), &[])
            .unwrap_err();
        assert_eq!(err.to_string(), "picky expects 2 parameters, got 0");
    }

    #[test]
    fn test_names_are_sorted_canonical_keys() {
        let mut registry = ExtensionRegistry::new();
        registry.register_value("zetaFilter", |v, _| Ok(v.clone()));
        registry.register_value("alpha", |v, _| Ok(v.clone()));
        assert_eq!(registry.names(), vec!["alpha".to_string(), "zeta_filter".to_string()]);
    }
}
