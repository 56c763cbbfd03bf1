//! `scrubchain filter`: runs configured chains over a JSON record.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use scrubchain_core::{
    dataset_from_json_str, dataset_to_json, load_default_config, ChainSource, FilterConfig,
    FilterEngine,
};

use crate::commands::info_msg;
use crate::ui::diff_viewer;
use crate::ui::theme::ThemeMap;

/// Options for [`run_filter`].
pub struct FilterOptions {
    pub input: String,
    pub config: FilterConfig,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub include_original: bool,
    pub quiet: bool,
}

/// Builds the effective configuration for one run.
///
/// The base comes from `config_path`, or from the first default location that
/// has a file, or is empty. Inline `field=chain` pairs replace or extend the
/// base chains, and `no_recursive` turns recursion off.
pub fn resolve_config(
    config_path: Option<&Path>,
    inline: &[(String, String)],
    no_recursive: bool,
) -> Result<FilterConfig> {
    let mut config = match config_path {
        Some(path) => FilterConfig::load_from_file(path)?,
        None => load_default_config()?.unwrap_or_default(),
    };
    for (field, chain) in inline {
        debug!("Inline chain for field '{}': {}", field, chain);
        config.set_chain(field.as_str(), ChainSource::from(chain.as_str()));
    }
    if no_recursive {
        config.recursive = false;
    }
    config.validate().context("Invalid filter configuration")?;
    Ok(config)
}

/// Filters the JSON record in `opts.input` and writes the result.
pub fn run_filter(opts: FilterOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting filter operation.");
    let data = dataset_from_json_str(&opts.input).context("Failed to read input record")?;

    let mut engine = FilterEngine::new();
    engine.configure_parsed(data, opts.config.filter_spec(), opts.config.recursive);
    let filtered = engine.get_filtered()?;

    let original_json = dataset_to_json(engine.get_original());
    let filtered_json = dataset_to_json(&filtered);
    let rendered = if opts.include_original {
        serde_json::to_string_pretty(&serde_json::json!({
            "original": original_json.clone(),
            "filtered": filtered_json.clone(),
        }))?
    } else {
        serde_json::to_string_pretty(&filtered_json)?
    };

    write_output(opts.output_path.as_deref(), &rendered, opts.quiet, theme_map)?;

    if opts.diff {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        diff_viewer::print_diff(
            &format!("{}\n", serde_json::to_string_pretty(&original_json)?),
            &format!("{}\n", serde_json::to_string_pretty(&filtered_json)?),
            &mut stderr.lock(),
            theme_map,
            supports_color,
        )?;
    }

    if !opts.quiet {
        let chained = opts
            .config
            .filters
            .keys()
            .filter(|field| filtered.contains_key(*field))
            .count();
        info_msg(
            format!("Filtered {} of {} field(s).", chained, filtered.len()),
            theme_map,
        );
    }
    info!("Filter operation completed.");
    Ok(())
}

fn write_output(path: Option<&Path>, rendered: &str, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    match path {
        Some(path) => {
            if !quiet {
                info_msg(format!("Writing filtered record to file: {}", path.display()), theme_map);
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", rendered)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", rendered)?;
        }
    }
    Ok(())
}
