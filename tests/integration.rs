//! Integration tests for mdhtml.
//!
//! These run whole documents through the translator and check the HTML,
//! the diagnostics, and the error returned.

use mdhtml_core::{HeadingPhase, Options, SyntaxError, WhitespaceRun};
use mdhtml_render::{translate_str, Document, TraceRecord, Translation, POSTAMBLE};

fn nodoc() -> Options {
    Options {
        trace_mode: false,
        suppress_document_wrapper: true,
    }
}

fn trace_options() -> Options {
    Options {
        trace_mode: true,
        suppress_document_wrapper: true,
    }
}

/// Helper to translate without the document wrapper.
fn run(input: &str) -> Translation {
    translate_str(input, &nodoc())
}

/// Helper for inputs expected to translate cleanly.
fn render(input: &str) -> String {
    let translation = run(input);
    if let Err(e) = translation.result {
        panic!("unexpected error for {:?}: {}", input, e);
    }
    translation.output
}

fn trace(input: &str) -> Vec<TraceRecord> {
    let translation = translate_str(input, &trace_options());
    serde_json::from_str(&translation.output).unwrap()
}

// =============================================================================
// Regular text
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(render(""), "");
}

#[test]
fn test_text_passes_through() {
    let input = "Plain paragraph.\nSecond line with <b>html</b> & symbols!\n";
    assert_eq!(render(input), input);
}

#[test]
fn test_utf8_passes_through() {
    let input = "Grüße, 世界 👋\n";
    assert_eq!(render(input), input);
}

#[test]
fn test_hash_inside_line_is_text() {
    assert_eq!(render("issue #42\n  # indented\n"), "issue #42\n  # indented\n");
}

// =============================================================================
// Headings
// =============================================================================

#[test]
fn test_all_heading_levels() {
    let input = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6\n";
    let expected = "<h1>H1</h1>\n<h2>H2</h2>\n<h3>H3</h3>\n<h4>H4</h4>\n<h5>H5</h5>\n<h6>H6</h6>\n";
    assert_eq!(render(input), expected);
}

#[test]
fn test_heading_between_paragraphs() {
    assert_eq!(
        render("intro\n## Middle\noutro\n"),
        "intro\n<h2>Middle</h2>\noutro\n"
    );
}

#[test]
fn test_heading_without_trailing_newline() {
    assert_eq!(render("# Title"), "<h1>Title</h1>");
    assert_eq!(render("# Title\n"), "<h1>Title</h1>\n");
}

#[test]
fn test_trim_is_idempotent() {
    let plain = render("# Title\n");
    assert_eq!(render("#  Title\n"), plain);
    assert_eq!(render("#     Title     \n"), plain);
    assert_eq!(render("# \t Title \t\n"), plain);
}

#[test]
fn test_heading_keeps_inner_markup() {
    assert_eq!(render("# C# and F#\n"), "<h1>C# and F#</h1>\n");
    assert_eq!(render("## a \\ b\n"), "<h2>a \\ b</h2>\n");
}

#[test]
fn test_heading_with_multibyte_text() {
    assert_eq!(render("# Überblick 📚\n"), "<h1>Überblick 📚</h1>\n");
}

#[test]
fn test_heading_followed_by_blank_lines() {
    assert_eq!(render("# A\n\n\n# B\n"), "<h1>A</h1>\n\n\n<h1>B</h1>\n");
}

#[test]
fn test_document_wrapper_surrounds_output() {
    let translation = translate_str("# Doc\n", &Options::default());
    assert!(translation.result.is_ok());
    assert_eq!(
        translation.output,
        format!("{}<h1>Doc</h1>\n{}", Document::default().preamble(), POSTAMBLE)
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_level_seven_fails() {
    let translation = run("####### Too deep\n");
    assert_eq!(
        translation.result.unwrap_err().syntax_kind(),
        Some(SyntaxError::HeadingLevelTooHigh { max: 6 })
    );
    assert!(!translation.output.contains("<h"));
}

#[test]
fn test_many_hashes_fail_at_seventh() {
    let translation = run("##########\n");
    assert!(translation.result.is_err());
    assert_eq!(
        translation.diagnostics,
        "error: line 1 column 7: heading level exceeds the maximum of 6\n"
    );
}

#[test]
fn test_missing_space_fails() {
    for input in ["#Title\n", "##\tTitle\n", "#\n", "###"] {
        let translation = run(input);
        assert_eq!(
            translation.result.unwrap_err().syntax_kind(),
            Some(SyntaxError::HeadingMissingSpace),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_whitespace_only_heading_fails() {
    for input in ["# \n", "## \t \n", "###    "] {
        let translation = run(input);
        assert_eq!(
            translation.result.unwrap_err().syntax_kind(),
            Some(SyntaxError::NoHeadingText),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_output_before_error_is_kept() {
    let translation = run("# Good\ntext\n#Bad\nnever reached\n");
    assert!(translation.result.is_err());
    assert_eq!(translation.output, "<h1>Good</h1>\ntext\n");
    assert_eq!(
        translation.diagnostics,
        "error: line 3 column 2: heading marker must be followed by a space\n"
    );
}

#[test]
fn test_error_omits_postamble() {
    let translation = translate_str("#oops\n", &Options::default());
    assert!(translation.result.is_err());
    assert_eq!(translation.output, Document::default().preamble());
}

// =============================================================================
// Escapes
// =============================================================================

#[test]
fn test_escaped_hash_is_literal() {
    assert_eq!(render("\\# Not a heading\n"), "# Not a heading\n");
    let records = trace("\\#");
    assert!(records
        .iter()
        .all(|r| r.heading_phase == HeadingPhase::Idle));
}

#[test]
fn test_escaped_backslash_does_not_escape_hash() {
    // The escape is spent on the second backslash; the hash is an ordinary
    // character and, past column 1, plain text.
    assert_eq!(render("\\\\# x\n"), "\\# x\n");
    let records = trace("\\\\#");
    assert!(records[0].escape_pending);
    assert!(!records[1].escape_pending);
    assert!(!records[2].escape_pending);
    assert!(!records[2].syntax);
}

#[test]
fn test_escape_never_persists() {
    let records = trace("\\ab");
    assert!(records[0].escape_pending);
    assert!(!records[1].escape_pending);
    assert!(!records[2].escape_pending);
    assert_eq!(render("\\ab"), "ab");
}

#[test]
fn test_trailing_backslash_is_dropped() {
    assert_eq!(render("end\\"), "end");
}

// =============================================================================
// Positions and warnings
// =============================================================================

#[test]
fn test_multibyte_char_moves_hash_off_column_one() {
    // "€" is three bytes but one column, so '#' sits at column 2.
    assert_eq!(render("€# x\n"), "€# x\n");
    let records = trace("€#");
    assert_eq!(records[3].column, 2);
    assert_eq!(records[3].heading_phase, HeadingPhase::Idle);
}

#[test]
fn test_three_spaces_warn_once() {
    let translation = run("a   b");
    assert!(translation.result.is_ok());
    assert_eq!(translation.output, "a   b");
    assert_eq!(translation.diagnostics.lines().count(), 1);
}

#[test]
fn test_tab_run_warns_once() {
    let translation = run("a\t\t\tb\n");
    assert_eq!(
        translation.diagnostics,
        "warning: line 1 column 2: tab character does not render as expected in HTML\n"
    );
}

#[test]
fn test_warning_columns_follow_characters() {
    let translation = run("é  x\n\tdone\n");
    assert_eq!(
        translation.diagnostics,
        "warning: line 1 column 3: multiple spaces collapse into one in HTML rendering\n\
         warning: line 2 column 1: tab character does not render as expected in HTML\n"
    );
}

#[test]
fn test_warnings_do_not_change_output() {
    let input = "#  Title\twith  gaps\n";
    let translation = run(input);
    assert!(translation.result.is_ok());
    assert_eq!(translation.output, "<h1>Title\twith  gaps</h1>\n");
    assert_eq!(translation.diagnostics.lines().count(), 3);
}

// =============================================================================
// Trace mode
// =============================================================================

#[test]
fn test_trace_covers_every_byte_and_the_sentinel() {
    let input = "## Hi\nok";
    let records = trace(input);
    assert_eq!(records.len(), input.len() + 1);

    let last = records.last().unwrap();
    assert_eq!(last.code_point, -1);
    assert!(last.end_of_input);
    assert!(records[..records.len() - 1].iter().all(|r| !r.end_of_input));
}

#[test]
fn test_trace_heading_transitions() {
    let records = trace("## Hi\n");
    let phases: Vec<_> = records.iter().map(|r| r.heading_phase).collect();
    assert_eq!(
        phases,
        vec![
            HeadingPhase::CountingLevel,
            HeadingPhase::CountingLevel,
            HeadingPhase::AccumulatingText,
            HeadingPhase::AccumulatingText,
            HeadingPhase::AccumulatingText,
            HeadingPhase::Idle,
            HeadingPhase::Idle,
        ]
    );
    let syntax: Vec<_> = records.iter().map(|r| r.syntax).collect();
    assert_eq!(syntax, vec![true, true, true, false, false, false, false]);
    assert_eq!(records[1].heading_level, 2);
    assert_eq!(records[5].heading_level, 0);
}

#[test]
fn test_trace_level_matches_phase() {
    for record in trace("### a\nb \\# c\n# d") {
        assert_eq!(
            record.heading_level == 0,
            record.heading_phase == HeadingPhase::Idle
        );
    }
}

#[test]
fn test_trace_whitespace_runs() {
    let records = trace("a  \tb");
    let runs: Vec<_> = records.iter().map(|r| r.whitespace_run).collect();
    assert_eq!(
        runs,
        vec![
            WhitespaceRun::None,
            WhitespaceRun::OneSpace,
            WhitespaceRun::TwoOrMoreSpaces,
            WhitespaceRun::OneOrMoreTabs,
            WhitespaceRun::None,
            WhitespaceRun::None,
        ]
    );
}

#[test]
fn test_trace_ignores_document_wrapper() {
    let options = Options {
        trace_mode: true,
        suppress_document_wrapper: false,
    };
    let translation = translate_str("x", &options);
    assert!(!translation.output.contains("<html"));
    let records: Vec<TraceRecord> = serde_json::from_str(&translation.output).unwrap();
    assert_eq!(records.len(), 2);
}
