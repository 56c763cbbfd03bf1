//! Table rendering for the `list` command.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use owo_colors::AnsiColors;
use std::io::{self, Write};

use scrubchain_core::BuiltinFilter;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Builds the table of built-in filters.
///
/// Without colors the table uses ASCII borders, no cell styling and no
/// wrapping, so the output is stable when piped.
pub fn build_filter_table(theme_map: &ThemeMap, enable_colors: bool) -> Table {
    let mut table = Table::new();
    if enable_colors {
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Disabled)
            .force_no_tty();
    }

    table.set_header(
        ["Filter", "Parameters", "Description"]
            .map(|h| styled(Cell::new(h).add_attribute(Attribute::Bold), ThemeEntry::Header, theme_map)),
    );
    for filter in BuiltinFilter::ALL {
        table.add_row(vec![
            styled(Cell::new(filter.name()), ThemeEntry::FilterName, theme_map),
            Cell::new(filter.params_synopsis()),
            Cell::new(filter.summary()),
        ]);
    }
    table
}

fn styled(cell: Cell, entry: ThemeEntry, theme_map: &ThemeMap) -> Cell {
    match color_for(entry, theme_map) {
        Some(color) => cell.fg(to_table_color(color)),
        None => cell,
    }
}

fn to_table_color(color: AnsiColors) -> Color {
    match color {
        AnsiColors::Black => Color::Black,
        AnsiColors::Red => Color::DarkRed,
        AnsiColors::Green => Color::DarkGreen,
        AnsiColors::Yellow => Color::DarkYellow,
        AnsiColors::Blue => Color::DarkBlue,
        AnsiColors::Magenta => Color::DarkMagenta,
        AnsiColors::Cyan => Color::DarkCyan,
        AnsiColors::White => Color::Grey,
        AnsiColors::BrightBlack => Color::DarkGrey,
        AnsiColors::BrightRed => Color::Red,
        AnsiColors::BrightGreen => Color::Green,
        AnsiColors::BrightYellow => Color::Yellow,
        AnsiColors::BrightBlue => Color::Blue,
        AnsiColors::BrightMagenta => Color::Magenta,
        AnsiColors::BrightCyan => Color::Cyan,
        AnsiColors::BrightWhite => Color::White,
        _ => Color::Reset,
    }
}

/// Writes the filter table followed by a usage hint.
pub fn print_filter_table<W: Write>(
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", build_filter_table(theme_map, enable_colors))?;
    writeln!(
        writer,
        "Chain filters with '|' and pass parameters after ':', e.g. 'trim|replace:_,-|slug'."
    )
}
