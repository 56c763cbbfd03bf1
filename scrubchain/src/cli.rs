// scrubchain/src/cli.rs
//! Command-line interface definition for the scrubchain application.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable that supplies the default `--config` path.
pub const CONFIG_ENV: &str = "SCRUBCHAIN_CONFIG";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrubchain",
    author = "Scrubchain Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run declarative filter chains over user input",
    long_about = "scrubchain normalizes user-submitted data before validation. Each field of a JSON record gets a chain of filters such as 'trim|lower' or 'slug:_', applied left to right; fields without a chain pass through unchanged.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `scrubchain` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filters the fields of a JSON object.
    #[command(about = "Filters the fields of a JSON object read from a file or stdin.")]
    Filter(FilterCommand),

    /// Runs one chain over each value given.
    #[command(about = "Runs one filter chain over each value (or each stdin line).")]
    Apply(ApplyCommand),

    /// Lists the built-in filters.
    #[command(about = "Lists the built-in filters and their parameters.")]
    List,
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the JSON object from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write filtered output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a filter configuration file (YAML).
    #[arg(long = "config", short = 'c', value_name = "FILE", env = CONFIG_ENV, help = "Path to a filter configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Inline chains, applied on top of the configuration file.
    #[arg(long = "field", short = 'f', value_name = "FIELD=CHAIN", value_parser = parse_field_chain, help = "Add or replace the chain for one field, e.g. -f 'name=trim|ucwords'.")]
    pub fields: Vec<(String, String)>,

    /// Apply chains to lists and maps as whole values.
    #[arg(long = "no-recursive", help = "Do not apply filters element by element to lists and maps.")]
    pub no_recursive: bool,

    /// Include the unfiltered record in the output.
    #[arg(long = "original", help = "Emit {\"original\": ..., \"filtered\": ...} instead of the filtered record alone.")]
    pub original: bool,

    /// Show a unified diff of the changes on stderr.
    #[arg(long, short = 'D', help = "Show a unified diff of original vs filtered JSON on stderr.")]
    pub diff: bool,
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// The chain to run, e.g. 'trim|slug'.
    #[arg(value_name = "CHAIN", help = "The filter chain, e.g. 'trim|slug'.")]
    pub chain: String,

    /// Values to filter (reads stdin lines if none are given).
    #[arg(value_name = "VALUE", help = "Values to filter. Reads one value per stdin line when omitted.")]
    pub values: Vec<String>,
}

/// Splits `field=chain` at the first `=`.
pub fn parse_field_chain(raw: &str) -> Result<(String, String), String> {
    let (field, chain) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=CHAIN, got '{}'", raw))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((field.to_string(), chain.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_field_chain_splits_once() {
        assert_eq!(
            parse_field_chain("title=replace:a,b|trim").unwrap(),
            ("title".to_string(), "replace:a,b|trim".to_string())
        );
        assert_eq!(
            parse_field_chain("eq=replace:=,-").unwrap(),
            ("eq".to_string(), "replace:=,-".to_string())
        );
        assert!(parse_field_chain("no-equals").is_err());
        assert!(parse_field_chain("=trim").is_err());
    }

    #[test]
    fn parses_filter_arguments() {
        let cli = Cli::try_parse_from([
            "scrubchain", "filter", "-f", "name=trim", "--field", "site=prep_url", "--no-recursive",
        ])
        .unwrap();
        let Commands::Filter(cmd) = cli.command else {
            panic!("expected filter command");
        };
        assert_eq!(cmd.fields.len(), 2);
        assert!(cmd.no_recursive);
        assert!(!cmd.diff);
    }
}
