//! Output types.

use serde::Serialize;

use crate::color::Color;
use crate::issue::MarkupIssue;

/// A span of literal text and the color active over it.
///
/// Serializes as `{"text": "...", "color": "#rrggbb"}`, omitting `color`
/// when the run is uncolored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TextRun<'src> {
    pub text: &'src str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color<'src>>,
}

impl<'src> TextRun<'src> {
    /// Color text, or `None` for an uncolored run.
    pub fn color_str(&self) -> Option<&'src str> {
        self.color.map(|color| color.as_str())
    }
}

/// Runs plus the issues found while producing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed<'src> {
    pub runs: Vec<TextRun<'src>>,
    pub issues: Vec<MarkupIssue>,
}

impl Parsed<'_> {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
