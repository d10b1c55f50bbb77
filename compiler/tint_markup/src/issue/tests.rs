use super::*;

#[test]
fn unknown_color_suggests_palette_name() {
    let issue = MarkupIssue::unknown_color(Span::new(0, 6), "Grey");
    assert_eq!(
        issue.kind,
        MarkupIssueKind::UnknownColor {
            token: "Grey".to_owned()
        }
    );
    assert_eq!(issue.suggestion, Some("gray"));
    assert_eq!(issue.help().as_deref(), Some("did you mean `{gray}`?"));
}

#[test]
fn unknown_color_without_close_match() {
    let issue = MarkupIssue::unknown_color(Span::new(0, 11), "chartreuse");
    assert_eq!(issue.suggestion, None);
    assert_eq!(issue.help(), None);
}

#[test]
fn messages_name_the_token() {
    let issue = MarkupIssue::malformed_hex(Span::new(3, 9), "#fff");
    assert!(issue.message().contains("`#fff`"));
    assert!(MarkupIssue::unknown_color(Span::new(0, 5), "mauve")
        .message()
        .contains("`mauve`"));
}

#[test]
fn codes_are_distinct() {
    let kinds = [
        MarkupIssueKind::UnknownColor {
            token: String::new(),
        },
        MarkupIssueKind::MalformedHex {
            token: String::new(),
        },
        MarkupIssueKind::UnterminatedDirective,
        MarkupIssueKind::NoLiteralText,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a.code(), b.code());
        }
    }
}

#[test]
fn display_includes_code_and_span() {
    let issue = MarkupIssue::unterminated(Span::new(4, 8));
    let text = issue.to_string();
    assert!(text.starts_with("[M003]"), "{text}");
    assert!(text.ends_with("at 4..8"), "{text}");
}
