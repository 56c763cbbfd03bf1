// scrubchain/src/main.rs
//! scrubchain entry point.
//!
//! Loads `.env`, sets up logging and the theme, then dispatches the subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use scrubchain::cli::{Cli, Commands, FilterCommand};
use scrubchain::commands::{apply, error_msg, filter, list, warn_msg};
use scrubchain::logger;
use scrubchain::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};

fn main() -> ExitCode {
    let dotenv_result = dotenvy::dotenv();
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));
    if let Err(e) = &dotenv_result {
        if !e.not_found() {
            debug!("Ignoring unreadable .env file: {}", e);
        }
    }

    let theme_map = match build_theme_map(args.theme.as_ref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            warn_msg(format!("{:#}. Using the default theme.", e), &fallback);
            fallback
        }
    };

    match run(args, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli, theme_map: &ThemeMap) -> Result<()> {
    match args.command {
        Commands::Filter(cmd) => run_filter_command(cmd, args.quiet, theme_map),
        Commands::Apply(cmd) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            apply::run_apply(&cmd.chain, &cmd.values, stdin.lock(), &mut stdout.lock())
        }
        Commands::List => list::run_list(theme_map),
    }
}

fn run_filter_command(cmd: FilterCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let config = filter::resolve_config(cmd.config.as_deref(), &cmd.fields, cmd.no_recursive)?;

    let input = match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    filter::run_filter(
        filter::FilterOptions {
            input,
            config,
            output_path: cmd.output,
            diff: cmd.diff,
            include_original: cmd.original,
            quiet,
        },
        theme_map,
    )
}
