//! Colored message helpers for stderr output.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` to `text` when color is enabled.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    match color_for(entry, theme_map) {
        Some(color) if enable_colors => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, message);
    writeln!(writer, "{}", paint(&line, entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "Warning: ", message, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, "Error: ", message, ThemeEntry::Error, theme_map, enable_colors)
}
