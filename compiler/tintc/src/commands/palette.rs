//! The `palette` command.

use std::io::Write;

use tint_markup::palette;

use super::ansi;
use crate::CliError;

/// One line per palette entry: swatch (when coloring), name, hex.
pub fn write_palette<W: Write + ?Sized>(out: &mut W, colors: bool) -> Result<(), CliError> {
    for entry in palette::entries() {
        if colors {
            let (r, g, b) = entry.color.rgb();
            write!(out, "{}    {} ", ansi::bg(r, g, b), ansi::RESET)?;
        }
        writeln!(out, "{:<8}{}", entry.name, entry.color)?;
    }
    Ok(())
}
