use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_spans(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    scan(source)
        .into_iter()
        .map(|tok| {
            let start = pos;
            pos += tok.len as usize;
            (tok.tag, &source[start..pos])
        })
        .collect()
}

// ─── Property Tests ────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "hello world",
        "{red}hello",
        "{red}{blue}",
        "a{b",
        "{a{b}c}",
        "line one\n{green}line two\n",
        "{}{ }{#AbC123}",
    ];
    for source in sources {
        let total_len: usize = scan(source).iter().map(|t| t.len as usize).sum();
        assert_eq!(total_len, source.len(), "total token length mismatch for {source:?}");
    }
}

#[test]
fn eof_is_sticky() {
    let buf = SourceBuffer::new("{red}");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Directive);
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

// ─── Text ──────────────────────────────────────────────────────

#[test]
fn empty_input_has_no_tokens() {
    assert!(scan("").is_empty());
}

#[test]
fn plain_text_is_one_token() {
    assert_eq!(scan_spans("hello world"), vec![(RawTag::Text, "hello world")]);
}

#[test]
fn stray_close_brace_is_text() {
    assert_eq!(scan_spans("a}b"), vec![(RawTag::Text, "a}b")]);
}

#[test]
fn multibyte_text_stays_whole() {
    assert_eq!(
        scan_spans("привет{red}мир"),
        vec![
            (RawTag::Text, "привет"),
            (RawTag::Directive, "{red}"),
            (RawTag::Text, "мир"),
        ]
    );
}

// ─── Directives ────────────────────────────────────────────────

#[test]
fn directive_then_text() {
    assert_eq!(
        scan_spans("{red}hello"),
        vec![(RawTag::Directive, "{red}"), (RawTag::Text, "hello")]
    );
}

#[test]
fn consecutive_directives() {
    assert_eq!(
        scan_spans("{red}{blue}x"),
        vec![
            (RawTag::Directive, "{red}"),
            (RawTag::Directive, "{blue}"),
            (RawTag::Text, "x"),
        ]
    );
}

#[test]
fn empty_directive() {
    assert_eq!(
        scan_spans("a{}b"),
        vec![
            (RawTag::Text, "a"),
            (RawTag::Directive, "{}"),
            (RawTag::Text, "b"),
        ]
    );
}

#[test]
fn directive_ends_at_first_close_brace() {
    assert_eq!(
        scan_spans("{a{b}c}"),
        vec![(RawTag::Directive, "{a{b}"), (RawTag::Text, "c}")]
    );
}

#[test]
fn directive_spans_newline() {
    assert_eq!(
        scan_spans("{re\nd}x"),
        vec![(RawTag::Directive, "{re\nd}"), (RawTag::Text, "x")]
    );
}

// ─── Errors ────────────────────────────────────────────────────

#[test]
fn unterminated_directive_runs_to_eof() {
    assert_eq!(
        scan_spans("a{red"),
        vec![(RawTag::Text, "a"), (RawTag::UnterminatedDirective, "{red")]
    );
}

#[test]
fn lone_open_brace_at_end() {
    assert_eq!(
        scan_spans("{red}x{"),
        vec![
            (RawTag::Directive, "{red}"),
            (RawTag::Text, "x"),
            (RawTag::UnterminatedDirective, "{"),
        ]
    );
}

#[test]
fn interior_null_is_text() {
    assert_eq!(scan_spans("a\0b"), vec![(RawTag::Text, "a\0b")]);
}
