//! Turns raw scanner tokens into colored text runs.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → Colorizer → Vec<TextRun>
//! ```
//!
//! The colorizer keeps two pieces of state: the start of the pending literal
//! text and the active color. A directive flushes the pending literal with
//! the old color, then replaces the color. Unterminated directives are not
//! flushed separately; they stay part of the pending literal, so `a{b`
//! remains one run.

use tint_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, trace};

use crate::color::{resolve_checked, Color, ResolvedColor, Unresolved};
use crate::issue::MarkupIssue;
use crate::run::{Parsed, TextRun};
use crate::span::Span;

pub(crate) struct Colorizer<'src> {
    source: &'src str,
    runs: Vec<TextRun<'src>>,
    issues: Vec<MarkupIssue>,
    /// Color applied to the next flushed literal.
    active: Option<Color<'src>>,
    /// Byte offset where the pending literal text begins.
    literal_start: usize,
    directives: usize,
}

impl<'src> Colorizer<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Colorizer {
            source,
            runs: Vec::new(),
            issues: Vec::new(),
            active: None,
            literal_start: 0,
            directives: 0,
        }
    }

    pub(crate) fn colorize(mut self) -> Parsed<'src> {
        let buf = SourceBuffer::new(self.source);
        let mut pos = 0usize;
        for token in RawScanner::new(buf.cursor()) {
            let start = pos;
            pos += token.len as usize;
            match token.tag {
                RawTag::Directive => self.directive(start, pos),
                RawTag::UnterminatedDirective => {
                    self.issues
                        .push(MarkupIssue::unterminated(Span::from_offsets(start, pos)));
                }
                RawTag::Text | RawTag::Eof => {}
            }
        }
        self.flush_literal(self.source.len());

        if self.runs.is_empty() {
            self.fallback();
        }

        Parsed {
            runs: self.runs,
            issues: self.issues,
        }
    }

    fn flush_literal(&mut self, end: usize) {
        let source = self.source;
        if end > self.literal_start {
            self.runs.push(TextRun {
                text: &source[self.literal_start..end],
                color: self.active,
            });
        }
    }

    fn directive(&mut self, start: usize, end: usize) {
        self.flush_literal(start);
        self.literal_start = end;
        self.directives += 1;

        // Strip the braces.
        let source = self.source;
        let token = &source[start + 1..end - 1];
        let span = Span::from_offsets(start, end);
        let resolved = match resolve_checked(token) {
            Ok(resolved) => resolved,
            Err(Unresolved::UnknownName(name)) => {
                self.issues.push(MarkupIssue::unknown_color(span, name));
                ResolvedColor::Absent
            }
            Err(Unresolved::MalformedHex(text)) => {
                self.issues.push(MarkupIssue::malformed_hex(span, text));
                ResolvedColor::Absent
            }
        };
        trace!(start, end, token, ?resolved, "directive");
        self.active = resolved.color();
    }

    /// Keep the result non-empty: one uncolored run over the whole input.
    fn fallback(&mut self) {
        if self.directives > 0 {
            debug!(
                len = self.source.len(),
                directives = self.directives,
                "markup has no literal text; using whole input as one run"
            );
            self.issues.push(MarkupIssue::no_literal_text(Span::from_offsets(
                0,
                self.source.len(),
            )));
        }
        self.runs.push(TextRun {
            text: self.source,
            color: None,
        });
    }
}
