// scrubchain/src/ui/diff_viewer.rs
//! Line diff between the original and filtered records.

use diffy::{create_patch, Line as DiffLine};
use std::io::{self, Write};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a line-by-line diff of `original` against `filtered`.
///
/// Removed lines are prefixed `- `, added lines `+ `, unchanged lines two
/// spaces.
pub fn print_diff<W: Write>(
    original: &str,
    filtered: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let patch = create_patch(original, filtered);
    writeln!(
        writer,
        "{}",
        paint("--- Diff View ---", ThemeEntry::DiffHeader, theme_map, enable_colors)
    )?;

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    let line = format!("- {}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&line, ThemeEntry::DiffRemoved, theme_map, enable_colors))?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let line = format!("+ {}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&line, ThemeEntry::DiffAdded, theme_map, enable_colors))?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes.")?;
    }
    writeln!(
        writer,
        "{}",
        paint("-----------------", ThemeEntry::DiffHeader, theme_map, enable_colors)
    )
}
