// scrubchain/src/logger.rs
//! Logger setup for the CLI.
//!
//! `RUST_LOG` is honored unless a level override is passed; without either,
//! only warnings and errors are shown.
//! License: MIT OR APACHE 2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` once. Later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    // Integration tests may have installed a logger already.
    let _ = builder.try_init();
}

/// Maps the `--quiet` and `--debug` flags to a level override.
///
/// `--quiet` wins when both are given.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
