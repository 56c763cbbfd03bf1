// scrubchain-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use scrubchain_core::chain::ChainSource;
use scrubchain_core::config::{merge_configs, FilterConfig};
use scrubchain_core::{dataset_from_json_str, headless_filter, Value};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
recursive: false
filters:
  name: trim|ucwords
  website: [trim, prep_url]
  code:
    - name: replace
      params: ["_", "-"]
    - upper
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;

    assert!(!config.recursive);
    assert_eq!(config.filters.len(), 3);
    let spec = config.filter_spec();
    let code: Vec<&str> = spec["code"].iter().map(|f| f.name.as_str()).collect();
    assert_eq!(code, vec!["replace", "upper"]);
    assert_eq!(spec["code"][0].params, vec!["_".to_string(), "-".to_string()]);
    Ok(())
}

#[test]
fn test_load_from_file_missing() {
    let err = FilterConfig::load_from_file("/definitely/not/here/filters.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_from_file_invalid_chain() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"filters:\n  name: 'trim||upper'\n")?;
    let err = FilterConfig::load_from_file(file.path()).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to parse config file"));
    assert!(chain.contains("filter #2 has an empty name"));
    Ok(())
}

#[test]
fn test_merged_config_drives_headless_filter() -> Result<()> {
    let default_config = FilterConfig::from_yaml_str("filters:\n  name: trim\n  code: lower\n")?;
    let mut user_config = FilterConfig::default();
    user_config.set_chain("code", ChainSource::from("upper|strip_dashes"));
    let merged = merge_configs(default_config, Some(user_config));

    let data = dataset_from_json_str(r#"{"name": "  Ada ", "code": "ab-cd", "other": " x "}"#)?;
    let filtered = headless_filter(data, &merged)?;

    assert_eq!(filtered["name"], Value::from("Ada"));
    assert_eq!(filtered["code"], Value::from("ABCD"));
    assert_eq!(filtered["other"], Value::from(" x "));
    Ok(())
}
