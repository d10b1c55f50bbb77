//! The `check` command: report markup issues.

use std::io::Write;

use tint_markup::MarkupIssue;

use super::ansi;
use crate::CliError;

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn paint<W: Write + ?Sized>(
    out: &mut W,
    colors: bool,
    style: &str,
    text: &str,
) -> std::io::Result<()> {
    if colors {
        write!(out, "{style}{text}{}", ansi::RESET)
    } else {
        out.write_all(text.as_bytes())
    }
}

/// Write one issue:
///
/// ```text
/// warning[M001]: unknown color `grey`; following text is uncolored
///   --> motd.txt:3:7
///   = help: did you mean `{gray}`?
/// ```
fn write_issue<W: Write + ?Sized>(
    out: &mut W,
    issue: &MarkupIssue,
    source: &str,
    path: &str,
    colors: bool,
) -> std::io::Result<()> {
    let (line, column) = issue.span.line_col(source);
    paint(out, colors, ansi::WARNING, &format!("warning[{}]", issue.kind.code()))?;
    writeln!(out, ": {}", issue.message())?;
    paint(out, colors, ansi::LOCATION, "  -->")?;
    writeln!(out, " {path}:{line}:{column}")?;
    if let Some(help) = issue.help() {
        paint(out, colors, ansi::HELP, "  = help")?;
        writeln!(out, ": {help}")?;
    }
    Ok(())
}

/// Report every issue in `source` and return how many there were.
///
/// Nothing is written for clean markup.
pub fn check_markup<W: Write + ?Sized>(
    out: &mut W,
    source: &str,
    path: &str,
    colors: bool,
) -> Result<usize, CliError> {
    let parsed = tint_markup::parse_with_diagnostics(source);
    for issue in &parsed.issues {
        write_issue(out, issue, source, path, colors)?;
    }

    let count = parsed.issues.len();
    if count > 0 {
        writeln!(out)?;
        paint(out, colors, ansi::WARNING, "warning")?;
        writeln!(out, ": {count} markup issue{} in {path}", plural_s(count))?;
    }
    Ok(count)
}
