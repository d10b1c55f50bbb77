//! Color values and directive token resolution.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::palette;

/// A resolved `#rrggbb` color.
///
/// Keeps the literal text as written (hex digits in any case) next to the
/// decoded RGB triple, so callers can echo the exact markup value or feed a
/// renderer without parsing again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color<'src> {
    repr: &'src str,
    rgb: [u8; 3],
}

impl<'src> Color<'src> {
    /// Parse `#` followed by exactly six hex digits. Case is preserved.
    pub fn from_hex(text: &'src str) -> Option<Self> {
        decode_hex(text.as_bytes()).map(|rgb| Color { repr: text, rgb })
    }

    /// The 7-character `#rrggbb` text.
    pub fn as_str(&self) -> &'src str {
        self.repr
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.rgb;
        (r, g, b)
    }
}

impl Color<'static> {
    /// Palette constructor, evaluated at compile time.
    pub(crate) const fn from_palette(hex: &'static str) -> Self {
        match decode_hex(hex.as_bytes()) {
            Some(rgb) => Color { repr: hex, rgb },
            None => panic!("palette entry is not a #rrggbb literal"),
        }
    }
}

impl fmt::Display for Color<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr)
    }
}

impl Serialize for Color<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.repr)
    }
}

const fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decode `#rrggbb`. Anything else, including `#rgb` shorthand, is `None`.
const fn decode_hex(bytes: &[u8]) -> Option<[u8; 3]> {
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }
    let mut rgb = [0u8; 3];
    let mut i = 0;
    while i < 3 {
        let Some(hi) = hex_nibble(bytes[1 + 2 * i]) else {
            return None;
        };
        let Some(lo) = hex_nibble(bytes[2 + 2 * i]) else {
            return None;
        };
        rgb[i] = (hi << 4) | lo;
        i += 1;
    }
    Some(rgb)
}

/// What a directive token resolved to.
///
/// Collapses to `Option<Color>` via [`color()`](Self::color) at the run
/// boundary; the variants only matter to diagnostics and debug output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedColor<'src> {
    /// `#rrggbb` literal, verbatim from the markup.
    Hex(Color<'src>),
    /// Palette name (canonical lowercase) and its color.
    Named {
        name: &'static str,
        color: Color<'static>,
    },
    /// No color: empty token or resolution failure.
    Absent,
}

impl<'src> ResolvedColor<'src> {
    pub fn color(self) -> Option<Color<'src>> {
        match self {
            Self::Hex(color) => Some(color),
            Self::Named { color, .. } => Some(color),
            Self::Absent => None,
        }
    }
}

/// Why a non-empty token did not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Unresolved<'src> {
    /// Looks like a hex code but is not `#` + six hex digits.
    MalformedHex(&'src str),
    /// Not in the palette.
    UnknownName(&'src str),
}

/// Resolve a directive token (the text between the braces).
///
/// Never fails: unresolvable tokens give [`ResolvedColor::Absent`].
pub fn resolve(token: &str) -> ResolvedColor<'_> {
    resolve_checked(token).unwrap_or(ResolvedColor::Absent)
}

/// Whitespace trimmed from both ends of a token.
///
/// The ECMAScript `String.prototype.trim` set: Unicode `White_Space` minus
/// NEL (U+0085), plus the byte-order mark (U+FEFF).
fn is_token_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Resolve a token, keeping the reason when it does not resolve.
///
/// An empty (or whitespace-only) token is a deliberate reset and resolves
/// to `Ok(Absent)`.
pub(crate) fn resolve_checked(token: &str) -> Result<ResolvedColor<'_>, Unresolved<'_>> {
    let trimmed = token.trim_matches(is_token_space);
    if trimmed.is_empty() {
        return Ok(ResolvedColor::Absent);
    }
    if let Some(color) = Color::from_hex(trimmed) {
        return Ok(ResolvedColor::Hex(color));
    }
    if let Some(entry) = palette::lookup(trimmed) {
        return Ok(ResolvedColor::Named {
            name: entry.name,
            color: entry.color,
        });
    }
    if trimmed.starts_with('#') {
        Err(Unresolved::MalformedHex(trimmed))
    } else {
        Err(Unresolved::UnknownName(trimmed))
    }
}
