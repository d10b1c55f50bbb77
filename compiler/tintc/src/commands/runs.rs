//! The `runs` command: print runs as a JSON array.

use std::io::Write;

use crate::CliError;

/// Write `[{"text": ..., "color": ...}, ...]`, pretty-printed, with a
/// trailing newline. Uncolored runs have no `color` key.
pub fn write_runs<W: Write + ?Sized>(out: &mut W, source: &str) -> Result<(), CliError> {
    let runs = tint_markup::parse(source);
    serde_json::to_writer_pretty(&mut *out, &runs)?;
    writeln!(out)?;
    Ok(())
}
