use super::*;
use pretty_assertions::assert_eq;

fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    assert!(f(&mut out).is_ok());
    String::from_utf8_lossy(&out).into_owned()
}

// === runs ===

#[test]
fn runs_json_shape() {
    let text = output(|out| write_runs(out, "{red}hot{} cold"));
    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => panic!("invalid JSON {text:?}: {err}"),
    };
    assert_eq!(
        value,
        serde_json::json!([
            {"text": "hot", "color": "#ef4444"},
            {"text": " cold"}
        ])
    );
    assert!(text.ends_with('\n'));
}

#[test]
fn runs_for_empty_input() {
    let text = output(|out| write_runs(out, ""));
    assert_eq!(text.trim_end(), "[\n  {\n    \"text\": \"\"\n  }\n]");
}

// === render ===

#[test]
fn render_with_colors() {
    let text = output(|out| render_ansi(out, "a{#ff8000}b", true));
    assert_eq!(text, "a\x1b[38;2;255;128;0mb\x1b[0m");
}

#[test]
fn render_without_colors_is_run_text() {
    let text = output(|out| render_ansi(out, "{red}a{blue}b", false));
    assert_eq!(text, "ab");
}

#[test]
fn render_directive_only_input_shows_it_verbatim() {
    let text = output(|out| render_ansi(out, "{red}{blue}", true));
    assert_eq!(text, "{red}{blue}");
}

// === strip ===

#[test]
fn strip_removes_directives() {
    let text = output(|out| write_plain(out, "{green}ok{} {c"));
    assert_eq!(text, "ok {c");
}

// === check ===

fn check(source: &str) -> (usize, String) {
    let mut out = Vec::new();
    let count = match check_markup(&mut out, source, "motd.txt", false) {
        Ok(count) => count,
        Err(err) => panic!("check failed: {err}"),
    };
    (count, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn check_clean_markup_is_silent() {
    assert_eq!(check("{red}fine{} text"), (0, String::new()));
}

#[test]
fn check_reports_location_and_help() {
    let (count, text) = check("hello\n  {grey}world");
    assert_eq!(count, 1);
    assert_eq!(
        text,
        "warning[M001]: unknown color `grey`; following text is uncolored\n\
         \x20 --> motd.txt:2:3\n\
         \x20 = help: did you mean `{gray}`?\n\
         \n\
         warning: 1 markup issue in motd.txt\n"
    );
}

#[test]
fn check_counts_multiple_issues() {
    let (count, text) = check("{#12}a{b");
    assert_eq!(count, 2);
    assert!(text.contains("warning[M002]"));
    assert!(text.contains("warning[M003]"));
    assert!(text.ends_with("2 markup issues in motd.txt\n"));
}

#[test]
fn check_with_colors_paints_labels() {
    let mut out = Vec::new();
    assert_eq!(check_markup(&mut out, "{x}", "f", true).ok(), Some(2));
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("\x1b[1;33mwarning[M001]\x1b[0m"));
}

// === palette ===

#[test]
fn palette_plain_listing() {
    let text = output(|out| write_palette(out, false));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "white   #ffffff");
    assert_eq!(lines[4], "red     #ef4444");
    assert_eq!(lines[15], "pink    #ec4899");
}

#[test]
fn palette_swatches() {
    let text = output(|out| write_palette(out, true));
    assert!(text.starts_with("\x1b[48;2;255;255;255m    \x1b[0m white"));
}

// === input ===

#[test]
fn read_missing_file() {
    let input = Input::Path("/nonexistent/tint.txt".to_owned());
    assert!(matches!(read_input(&input), Err(CliError::NotFound { .. })));
}
