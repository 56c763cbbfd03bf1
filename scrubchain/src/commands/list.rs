//! `scrubchain list`: prints the built-in filter table.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use crate::ui::filter_table::print_filter_table;
use crate::ui::theme::ThemeMap;

pub fn run_list(theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    print_filter_table(&mut writer, theme_map, supports_color)?;
    Ok(())
}
