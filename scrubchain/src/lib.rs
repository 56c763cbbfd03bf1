// scrubchain/src/lib.rs
//! # scrubchain CLI Application
//!
//! Command-line front end for `scrubchain-core`: filters JSON records with
//! chains from a YAML config or the command line, runs one chain over loose
//! values, and lists the built-in filters.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
