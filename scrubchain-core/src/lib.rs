// scrubchain-core/src/lib.rs
//! # scrubchain Core Library
//!
//! `scrubchain-core` normalizes user input before it is validated. A caller
//! supplies a dataset (field name to value) and a filter chain per field, such
//! as `"trim|ucwords"` or `["trim", "replace:_,-"]`; the engine runs each chain
//! left to right and hands back a copy of the dataset with the filtered values
//! in place.
//!
//! ## Modules
//!
//! * `chain`: Parses chain strings into ordered filter invocations.
//! * `engine`: The [`FilterEngine`]: configuration, name resolution, execution.
//! * `registry`: The [`Filter`] trait and the caller-owned extension registry.
//! * `filters`: The built-in transformer library and the ASCII-fold seam.
//! * `value`: [`Value`] and [`Dataset`], plus JSON conversion.
//! * `config`: YAML filter configuration, validation and layering.
//! * `headless`: One-shot helpers for non-interactive use.
//! * `errors`: The [`ScrubError`] enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrubchain_core::{FilterEngine, Dataset, Value};
//! use scrubchain_core::chain::{filter_spec, ChainSource};
//!
//! let mut engine = FilterEngine::new();
//! engine.register_extension("shout", |value, _| Ok(format!("{}!", value.to_uppercase())));
//!
//! let mut data = Dataset::new();
//! data.insert("title".to_string(), Value::from("  Hello Wörld "));
//! data.insert("greeting".to_string(), Value::from("hi"));
//! data.insert("untouched".to_string(), Value::from(" as is "));
//!
//! engine.make(data, filter_spec([
//!     ("title", ChainSource::from("trim|slug")),
//!     ("greeting", ChainSource::from(vec!["shout"])),
//! ]));
//!
//! let filtered = engine.get_filtered().unwrap();
//! assert_eq!(filtered["title"], Value::from("hello-world"));
//! assert_eq!(filtered["greeting"], Value::from("HI!"));
//! assert_eq!(filtered["untouched"], Value::from(" as is "));
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return [`ScrubError`]. An unknown filter name or a failing
//! extension aborts the whole run; no partially filtered dataset is returned.
//! File loading in `config` uses `anyhow` with context, like the rest of the
//! I/O-facing code.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod chain;
pub mod config;
pub mod engine;
pub mod errors;
pub mod filters;
pub mod headless;
pub mod log_values;
pub mod registry;
pub mod value;

/// Re-exports the engine and its resolution type.
pub use engine::{FilterEngine, ResolvedFilter};

/// Re-exports the error type.
pub use errors::ScrubError;

/// Re-exports chain types.
pub use chain::{ChainItem, ChainSource, FilterInvocation, FilterSpec, FilterSpecSource};

/// Re-exports the extension seam.
pub use registry::{ExtensionRegistry, Filter};

/// Re-exports value types and JSON helpers.
pub use value::{dataset_from_json_str, dataset_to_json, Dataset, Value};

/// Re-exports configuration types and loaders.
pub use config::{config_candidate_paths, load_default_config, merge_configs, FilterConfig};

/// Re-exports the built-in filter table and transliteration seam.
pub use filters::{ascii_fold::AsciiFold, BuiltinFilter, DefaultAsciiFold};

/// Re-exports the one-shot helpers.
pub use headless::{headless_apply_chain, headless_filter, headless_filter_json};
