//! Raw token tags produced by the scanner.

/// Kind of a raw token.
///
/// Discriminants are grouped by category: content at 0-15, errors at
/// 240-254, and `Eof` at 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Literal text up to the next `{` or EOF.
    Text = 0,
    /// A complete `{...}` directive, braces included.
    Directive = 1,

    /// A `{` with no `}` anywhere after it. Spans to EOF and is kept as
    /// literal text by the colorizer.
    UnterminatedDirective = 240,

    /// End of input. Always has `len == 0`.
    Eof = 255,
}

/// A raw token: tag plus byte length.
///
/// Offsets are implicit; a consumer sums lengths to recover positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);

#[cfg(test)]
mod tests;
