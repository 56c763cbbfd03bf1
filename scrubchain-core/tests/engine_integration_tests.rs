// scrubchain-core/tests/engine_integration_tests.rs
use anyhow::{bail, Result};
use std::sync::Arc;
use test_log::test;

use scrubchain_core::chain::{filter_spec, ChainItem, ChainSource, FilterInvocation};
use scrubchain_core::{
    dataset_from_json_str, AsciiFold, Dataset, Filter, FilterEngine, ScrubError, Value,
};

fn dataset(json: &str) -> Dataset {
    dataset_from_json_str(json).unwrap()
}

#[test]
fn test_full_form_normalization() -> Result<()> {
    let data = dataset(
        r#"{
            "first_name": "  jOHN ",
            "email": " John.Doe@Example.COM ",
            "website": "example.com",
            "bio": "<b>Hi</b> & 'bye'",
            "handle": "Åsa Öberg",
            "submit": "Send"
        }"#,
    );
    let mut engine = FilterEngine::new();
    engine.make(
        data,
        filter_spec([
            ("first_name", ChainSource::from("trim|lower|ucfirst")),
            ("email", ChainSource::from("trim|lower")),
            ("website", ChainSource::from("trim|prep_url")),
            ("bio", ChainSource::from("xss_clean")),
            ("handle", ChainSource::from("slug:_")),
        ]),
    );
    let filtered = engine.get_filtered()?;

    assert_eq!(filtered["first_name"], Value::from("John"));
    assert_eq!(filtered["email"], Value::from("john.doe@example.com"));
    assert_eq!(filtered["website"], Value::from("http://example.com"));
    assert_eq!(
        filtered["bio"],
        Value::from("&lt;b&gt;Hi&lt;/b&gt; &amp; &#039;bye&#039;")
    );
    assert_eq!(filtered["handle"], Value::from("asa_oberg"));
    assert_eq!(filtered["submit"], Value::from("Send"));

    let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["first_name", "email", "website", "bio", "handle", "submit"]
    );
    Ok(())
}

#[test]
fn test_extension_with_parameters_in_chain() -> Result<()> {
    let mut engine = FilterEngine::new();
    engine.register_extension("wrap", |value, params| {
        let [open, close] = params else {
            bail!("wrap expects two parameters");
        };
        Ok(format!("{open}{value}{close}"))
    });

    let data = dataset(r#"{"a": " x ", "b": "y"}"#);
    engine.make(
        data,
        filter_spec([
            ("a", ChainSource::from("trim|wrap:[,]")),
            ("b", ChainSource::from("wrap")),
        ]),
    );
    let err = engine.get_filtered().unwrap_err();
    assert!(matches!(err, ScrubError::Extension(_)));
    assert_eq!(err.to_string(), "wrap expects two parameters");

    engine.make(
        dataset(r#"{"a": " x "}"#),
        filter_spec([("a", ChainSource::from("trim|wrap:[,]"))]),
    );
    assert_eq!(engine.get_filtered()?["a"], Value::from("[x]"));
    Ok(())
}

#[test]
fn test_structured_chain_items() -> Result<()> {
    let mut engine = FilterEngine::new();
    let chain = ChainSource::Sequence(vec![
        ChainItem::from("trim"),
        ChainItem::from(FilterInvocation::new(
            "replace",
            vec!["a,b".to_string(), "|".to_string()],
        )),
    ]);
    engine.make(dataset(r#"{"f": " 1a,b2 "}"#), filter_spec([("f", chain)]));
    assert_eq!(engine.get_filtered()?["f"], Value::from("1|2"));
    Ok(())
}

#[test]
fn test_recursive_over_nested_map() -> Result<()> {
    let data = dataset(r#"{"tags": {"x": " a ", "y": " b "}, "list": [" c "]}"#);
    let mut engine = FilterEngine::new();
    engine.make(
        data,
        filter_spec([
            ("tags", ChainSource::from("trim|upper")),
            ("list", ChainSource::from("trim")),
        ]),
    );
    let filtered = engine.get_filtered()?;
    assert_eq!(
        filtered["tags"].to_json(),
        serde_json::json!({"x": "A", "y": "B"})
    );
    assert_eq!(filtered["list"], Value::from(vec!["c"]));
    Ok(())
}

#[test]
fn test_custom_filter_trait_object() -> Result<()> {
    struct CountItems;

    impl Filter for CountItems {
        fn apply(&self, value: &Value, _params: &[String]) -> Result<Value, ScrubError> {
            Ok(match value {
                Value::List(items) => Value::from(items.len().to_string()),
                Value::Map(map) => Value::from(map.len().to_string()),
                Value::Text(_) | Value::Scalar(_) => Value::from("1"),
            })
        }
    }

    let mut engine = FilterEngine::new();
    engine.register_filter("countItems", Arc::new(CountItems));
    engine.configure(
        dataset(r#"{"tags": ["a", "b", "c"]}"#),
        filter_spec([("tags", ChainSource::from("count_items"))]),
        false,
    );
    assert_eq!(engine.get_filtered()?["tags"], Value::from("3"));
    Ok(())
}

#[test]
fn test_engine_wide_ascii_fold_override() -> Result<()> {
    struct Umlauts;

    impl AsciiFold for Umlauts {
        fn fold(&self, input: &str) -> String {
            input.replace('ü', "ue")
        }
    }

    let mut engine = FilterEngine::new().with_ascii_fold(Arc::new(Umlauts));
    engine.make(
        dataset(r#"{"city": "Zürich"}"#),
        filter_spec([("city", ChainSource::from("slug"))]),
    );
    assert_eq!(engine.get_filtered()?["city"], Value::from("zuerich"));
    Ok(())
}

#[test]
fn test_unknown_filter_aborts_run() {
    let mut engine = FilterEngine::new();
    engine.make(
        dataset(r#"{"a": "x", "b": "y"}"#),
        filter_spec([
            ("a", ChainSource::from("trim")),
            ("b", ChainSource::from("no_such_filter")),
        ]),
    );
    let err = engine.get_filtered().unwrap_err();
    assert_eq!(err.to_string(), "'no_such_filter' is not a valid filter.");
}
