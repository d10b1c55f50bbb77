//! Non-fatal markup issues.
//!
//! The colorizer never rejects input. When markup is probably not what the
//! author meant, it records a `MarkupIssue` carrying:
//! - WHERE: `span` of the directive (or the whole input)
//! - WHAT: `kind`
//! - HOW: an optional palette name to use instead
//!
//! Issues are observations only; the runs are identical with or without them.

use std::fmt;

use crate::palette;
use crate::span::Span;
use crate::suggest::suggest_similar;

/// A markup issue with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkupIssue {
    pub span: Span,
    pub kind: MarkupIssueKind,
    /// Palette name close to an unknown token.
    pub suggestion: Option<&'static str>,
}

/// What looked wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkupIssueKind {
    /// Token is not a palette name. Color is turned off.
    UnknownColor { token: String },
    /// Token starts with `#` but is not `#` + six hex digits. Color is
    /// turned off.
    MalformedHex { token: String },
    /// `{` without a closing `}`. Kept as literal text.
    UnterminatedDirective,
    /// The input had directives and no literal text, so the whole input is
    /// shown verbatim.
    NoLiteralText,
}

impl MarkupIssueKind {
    /// Stable short code, used by `tint check` output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownColor { .. } => "M001",
            Self::MalformedHex { .. } => "M002",
            Self::UnterminatedDirective => "M003",
            Self::NoLiteralText => "M004",
        }
    }
}

impl MarkupIssue {
    pub(crate) fn unknown_color(span: Span, token: &str) -> Self {
        let suggestion = suggest_similar(&token.to_lowercase(), palette::names());
        MarkupIssue {
            span,
            kind: MarkupIssueKind::UnknownColor {
                token: token.to_owned(),
            },
            suggestion,
        }
    }

    pub(crate) fn malformed_hex(span: Span, token: &str) -> Self {
        MarkupIssue {
            span,
            kind: MarkupIssueKind::MalformedHex {
                token: token.to_owned(),
            },
            suggestion: None,
        }
    }

    pub(crate) fn unterminated(span: Span) -> Self {
        MarkupIssue {
            span,
            kind: MarkupIssueKind::UnterminatedDirective,
            suggestion: None,
        }
    }

    pub(crate) fn no_literal_text(span: Span) -> Self {
        MarkupIssue {
            span,
            kind: MarkupIssueKind::NoLiteralText,
            suggestion: None,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            MarkupIssueKind::UnknownColor { token } => {
                format!("unknown color `{token}`; following text is uncolored")
            }
            MarkupIssueKind::MalformedHex { token } => {
                format!("malformed hex color `{token}`; expected `#` and six hex digits")
            }
            MarkupIssueKind::UnterminatedDirective => {
                "`{` is never closed; it is shown as text".to_owned()
            }
            MarkupIssueKind::NoLiteralText => {
                "markup has no text outside directives; it is shown verbatim".to_owned()
            }
        }
    }

    pub fn help(&self) -> Option<String> {
        self.suggestion
            .map(|name| format!("did you mean `{{{name}}}`?"))
    }
}

impl fmt::Display for MarkupIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.kind.code(), self.message(), self.span)
    }
}

#[cfg(test)]
mod tests;
