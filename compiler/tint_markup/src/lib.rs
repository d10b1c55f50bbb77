//! Inline color markup for operator-authored text.
//!
//! A markup string embeds `{token}` directives that switch the active color
//! for the literal text that follows:
//!
//! ```text
//! "{red}Offline{}  since {#94A3B8}09:00"
//!   → ("Offline", #ef4444) ("  since ", none) ("09:00", #94A3B8)
//! ```
//!
//! A token is either `#` plus six hex digits (kept verbatim) or a palette
//! name (case-insensitive). Anything else, including an empty token, turns
//! color off. A directive replaces the active color; there is no nesting.
//!
//! # Leniency
//!
//! Parsing never fails. Unknown names, malformed hex codes and an unclosed
//! `{` degrade to uncolored text. [`parse_with_diagnostics`] reports those
//! cases as [`MarkupIssue`]s for editors and linters without changing the
//! runs it returns.
//!
//! # Pipeline
//!
//! ```text
//! &str → SourceBuffer → RawScanner → (RawTag, len) → Colorizer → Vec<TextRun>
//! ```

mod color;
mod colorizer;
mod issue;
pub mod palette;
mod run;
mod span;
mod suggest;

pub use color::{resolve, Color, ResolvedColor};
pub use issue::{MarkupIssue, MarkupIssueKind};
pub use palette::PaletteEntry;
pub use run::{Parsed, TextRun};
pub use span::Span;
pub use suggest::{edit_distance, suggest_similar};

use colorizer::Colorizer;
use tint_lexer_core::{RawScanner, RawTag, RawToken, SourceBuffer};

/// Split markup into colored text runs.
///
/// The result is never empty. Input without directives (including `""`)
/// yields one uncolored run holding the whole input; input made only of
/// directives yields the same single run as a fallback.
pub fn parse(input: &str) -> Vec<TextRun<'_>> {
    Colorizer::new(input).colorize().runs
}

/// Like [`parse`], additionally collecting non-fatal markup issues.
///
/// `parse_with_diagnostics(s).runs == parse(s)` for every input.
pub fn parse_with_diagnostics(input: &str) -> Parsed<'_> {
    Colorizer::new(input).colorize()
}

/// The input with every complete `{...}` directive removed.
///
/// An unclosed `{` and everything after it is kept, matching what the runs
/// of [`parse`] contain. Unlike `parse`, there is no fallback: markup made
/// only of directives strips to `""`.
pub fn plain_text(input: &str) -> String {
    let buf = SourceBuffer::new(input);
    strip_directives(input, RawScanner::new(buf.cursor()))
}

/// Drop the `Directive` tokens from `input`.
///
/// The scanner's offsets are `u32`, so on huge inputs the tokens may stop
/// short of `input.len()`, possibly inside a multi-byte character. Only
/// directive ends are used as cut points; they sit after a `}` and are always
/// char boundaries. Everything after the last directive is kept.
fn strip_directives(input: &str, tokens: impl IntoIterator<Item = RawToken>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0usize;
    let mut literal_start = 0usize;
    for token in tokens {
        let start = pos;
        pos += token.len as usize;
        if token.tag == RawTag::Directive {
            out.push_str(&input[literal_start..start]);
            literal_start = pos;
        }
    }
    out.push_str(&input[literal_start..]);
    out
}

#[cfg(test)]
mod tests;
