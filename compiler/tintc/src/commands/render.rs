//! The `render` and `strip` commands.

use std::io::Write;

use super::ansi;
use crate::CliError;

/// Render markup to the terminal, coloring each run's foreground.
///
/// With `colors == false` the runs' text is written unstyled. For input made
/// only of directives that is the raw input, since `parse` falls back to it.
pub fn render_ansi<W: Write + ?Sized>(
    out: &mut W,
    source: &str,
    colors: bool,
) -> Result<(), CliError> {
    for run in tint_markup::parse(source) {
        match run.color {
            Some(color) if colors => {
                let (r, g, b) = color.rgb();
                write!(out, "{}{}{}", ansi::fg(r, g, b), run.text, ansi::RESET)?;
            }
            _ => out.write_all(run.text.as_bytes())?,
        }
    }
    Ok(())
}

/// Write the text with every directive removed.
pub fn write_plain<W: Write + ?Sized>(out: &mut W, source: &str) -> Result<(), CliError> {
    out.write_all(tint_markup::plain_text(source).as_bytes())?;
    Ok(())
}
