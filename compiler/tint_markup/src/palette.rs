//! The fixed color palette.
//!
//! Sixteen names compiled into a static table. Lookup is case-insensitive
//! and never allocates for ASCII input.

use crate::color::Color;

/// One palette name and its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Canonical lowercase name.
    pub name: &'static str,
    pub color: Color<'static>,
}

const fn entry(name: &'static str, hex: &'static str) -> PaletteEntry {
    PaletteEntry {
        name,
        color: Color::from_palette(hex),
    }
}

static PALETTE: [PaletteEntry; 16] = [
    entry("white", "#ffffff"),
    entry("black", "#000000"),
    entry("dark", "#0b1220"),
    entry("gray", "#94a3b8"),
    entry("red", "#ef4444"),
    entry("orange", "#f97316"),
    entry("yellow", "#eab308"),
    entry("lime", "#84cc16"),
    entry("green", "#22c55e"),
    entry("teal", "#14b8a6"),
    entry("cyan", "#22d3ee"),
    entry("blue", "#3b82f6"),
    entry("indigo", "#6366f1"),
    entry("violet", "#8b5cf6"),
    entry("grape", "#a78bfa"),
    entry("pink", "#ec4899"),
];

/// Shortest and longest palette names, in bytes.
const NAME_LEN: std::ops::RangeInclusive<usize> = 3..=6;

/// All entries in declaration order.
pub fn entries() -> &'static [PaletteEntry] {
    &PALETTE
}

/// All canonical names in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|entry| entry.name)
}

/// Look up a palette name, ignoring case.
///
/// Uses the name's length as a first-pass filter for ASCII input. Non-ASCII
/// input goes through full Unicode lowercasing, which can change its
/// length (`"PIN\u{212A}"` with a Kelvin sign lowercases to `"pink"`).
pub fn lookup(name: &str) -> Option<&'static PaletteEntry> {
    if name.is_ascii() {
        if !NAME_LEN.contains(&name.len()) {
            return None;
        }
        return PALETTE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name));
    }
    let lower = name.to_lowercase();
    PALETTE.iter().find(|entry| entry.name == lower)
}
