// scrubchain/src/ui/mod.rs
pub mod diff_viewer;
pub mod filter_table;
pub mod output_format;
pub mod theme;
