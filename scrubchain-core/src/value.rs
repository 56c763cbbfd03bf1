//! Field values and datasets.
//!
//! A [`Dataset`] is an ordered mapping from field name to [`Value`]. Values are
//! text, a non-string JSON scalar, or a collection (list or map) of further
//! values. Scalars are kept as read and only turned into text when a filter
//! touches them. Collections keep
//! their element order, and maps keep their key order, so filtered output lines
//! up with the input it came from.
//!
//! License: MIT OR APACHE 2.0

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// An ordered mapping from field name to value.
pub type Dataset = IndexMap<String, Value>;

/// A single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    /// A number, boolean or `null`, written back exactly as it was read.
    Scalar(serde_json::Value),
}

impl Value {
    /// Returns the text if this value is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The input a text filter sees: strings as is, numbers and booleans in
    /// their JSON form, `null` as an empty string. `None` for collections.
    pub fn text_form(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::Scalar(serde_json::Value::Null) => Some(Cow::Borrowed("")),
            Value::Scalar(serde_json::Value::String(s)) => Some(Cow::Borrowed(s)),
            Value::Scalar(other) => Some(Cow::Owned(other.to_string())),
            Value::List(_) | Value::Map(_) => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Scalar(serde_json::Value::Null) => "null",
            Value::Scalar(serde_json::Value::Bool(_)) => "boolean",
            Value::Scalar(_) => "number",
        }
    }

    /// Builds a value from arbitrary JSON.
    ///
    /// Numbers, booleans and `null` are kept as [`Value::Scalar`].
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(s) => Value::Text(s),
            scalar @ (serde_json::Value::Null
            | serde_json::Value::Bool(_)
            | serde_json::Value::Number(_)) => Value::Scalar(scalar),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Scalar(scalar) => scalar.clone(),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

/// Parses a JSON object into a dataset.
///
/// The top level must be an object; its keys become field names in document order.
pub fn dataset_from_json_str(json: &str) -> Result<Dataset, crate::ScrubError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    match parsed {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, Value::from_json(v)))
            .collect()),
        other => Err(crate::ScrubError::Config(format!(
            "expected a JSON object at the top level, found {}",
            json_kind(&other)
        ))),
    }
}

/// Serializes a dataset back into a JSON object, preserving field order.
pub fn dataset_to_json(data: &Dataset) -> serde_json::Value {
    serde_json::Value::Object(
        data.iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_json_keeps_order_and_scalars() {
        let data = dataset_from_json_str(r#"{"b": 1, "a": true, "c": null, "d": ["x", 2]}"#)
            .unwrap();
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c", "d"]);
        assert_eq!(data["b"], Value::Scalar(serde_json::json!(1)));
        assert_eq!(data["a"].kind(), "boolean");
        assert_eq!(data["c"].kind(), "null");
        assert_eq!(
            data["d"],
            Value::List(vec![Value::from("x"), Value::Scalar(serde_json::json!(2))])
        );
    }

    #[test]
    fn test_scalars_round_trip_unchanged() {
        let json = r#"{"age": 41, "note": null, "active": true, "ratio": 1.0, "tags": [1, "a"]}"#;
        let data = dataset_from_json_str(json).unwrap();
        let expected: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(dataset_to_json(&data), expected);
        assert_eq!(dataset_to_json(&data).to_string(), expected.to_string());
    }

    #[test]
    fn test_text_form_of_scalars() {
        assert_eq!(Value::Scalar(serde_json::json!(41)).text_form().unwrap(), "41");
        assert_eq!(Value::Scalar(serde_json::json!(true)).text_form().unwrap(), "true");
        assert_eq!(Value::Scalar(serde_json::Value::Null).text_form().unwrap(), "");
        assert!(Value::from(vec!["a"]).text_form().is_none());
    }

    #[test]
    fn test_dataset_from_json_rejects_non_object() {
        let err = dataset_from_json_str("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_untagged_deserialize_nested_map() {
        let value: Value = serde_json::from_str(r#"{"inner": {"k": "v"}}"#).unwrap();
        let Value::Map(map) = value else {
            panic!("expected a map");
        };
        assert!(matches!(map["inner"], Value::Map(_)));
    }
}
