//! Low-level scanner for tint color markup.
//!
//! Splits a markup string into `(RawTag, len)` pairs without interpreting
//! what a directive means. Color resolution, palette lookup, and run
//! assembly live in `tint_markup`.
//!
//! ```text
//! "a{red}b{c"  →  Text(1) Directive(5) Text(1) UnterminatedDirective(2) Eof
//! ```
//!
//! The grammar is a single level of braces: a directive opens at `{` and
//! closes at the first `}` after it. Anything between, including further
//! `{` bytes and newlines, belongs to the directive token.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
