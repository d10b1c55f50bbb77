use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Text as u8, 0);
    assert_eq!(RawTag::Directive as u8, 1);
    assert_eq!(RawTag::UnterminatedDirective as u8, 240);
    assert_eq!(RawTag::Eof as u8, 255);
}
