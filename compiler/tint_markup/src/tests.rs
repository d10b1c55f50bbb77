use super::*;
use pretty_assertions::assert_eq;

fn token(tag: RawTag, len: u32) -> RawToken {
    RawToken { tag, len }
}

#[test]
fn strip_matches_scanner_output() {
    let input = "{red}a{}b{c";
    let buf = SourceBuffer::new(input);
    assert_eq!(strip_directives(input, RawScanner::new(buf.cursor())), "ab{c");
}

/// Token lengths that stop inside `é` model an input whose length saturated
/// the scanner's `u32` offsets. The tail must be kept whole.
#[test]
fn strip_keeps_tail_when_tokens_stop_mid_char() {
    let input = "{red}aé";
    let tokens = [token(RawTag::Directive, 5), token(RawTag::Text, 2)];
    assert_eq!(strip_directives(input, tokens), "aé");

    let input = "aé";
    assert_eq!(strip_directives(input, [token(RawTag::Text, 2)]), "aé");
}

#[test]
fn strip_keeps_tail_when_unterminated_stops_mid_char() {
    let input = "x{}{é";
    let tokens = [
        token(RawTag::Text, 1),
        token(RawTag::Directive, 2),
        token(RawTag::UnterminatedDirective, 2),
    ];
    assert_eq!(strip_directives(input, tokens), "x{é");
}
