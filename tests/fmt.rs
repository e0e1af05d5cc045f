//! Tests for templates, tags, and assembled lines.

use stackkit::fmt::{FormatSegment, FormatTemplate, FormatValues, LineFormatter, TagConfig};
use stackkit::record::LogRecord;
use stackkit::{Level, Transform};

#[test]
fn template_parses_placeholders_and_literals() {
    let template = FormatTemplate::parse("[{timestamp}] {tag} [{context}] {msg}");
    let placeholders = template
        .segments()
        .iter()
        .filter(|s| matches!(s, FormatSegment::Placeholder(_)))
        .count();
    assert_eq!(placeholders, 4);
}

#[test]
fn template_keeps_unknown_placeholders_literal() {
    let template = FormatTemplate::parse("{nope} {msg}");
    let rendered = template.render(&FormatValues::new().msg("hi"));
    assert_eq!(rendered, "{nope} hi");
}

#[test]
fn tag_pads_to_five_columns() {
    let tag = TagConfig::default();
    assert_eq!(tag.format(Level::Info), "INFO ");
    assert_eq!(tag.format(Level::Warn), "WARN ");
    assert_eq!(tag.format(Level::Error), "ERROR");
    assert_eq!(tag.format(Level::Debug), "DEBUG");
}

#[test]
fn tag_respects_transform_and_label() {
    let tag = TagConfig::new()
        .transform(Transform::Lowercase)
        .label(Level::Error, "FATAL");
    assert_eq!(tag.format(Level::Error), "fatal");
}

#[test]
fn line_contains_context_and_message() {
    let formatter = LineFormatter::new();
    let record = LogRecord::new(Level::Info, "NET", "connected");
    let line = formatter.format(&record);

    assert!(line.contains("INFO "));
    assert!(line.contains("[NET]"));
    assert!(line.ends_with("connected"));
    // RFC 3339 timestamp in brackets up front
    assert!(line.starts_with('['));
    assert!(line.contains('T') && line.contains('Z'));
}

#[test]
fn empty_context_renders_empty_brackets() {
    let formatter = LineFormatter::new();
    let record = LogRecord::new(Level::Warn, "", "headless");
    assert!(formatter.format(&record).contains("[] headless"));
}

#[test]
fn data_block_is_pretty_printed() {
    let formatter = LineFormatter::new();
    let record = LogRecord::new(Level::Info, "API", "payload")
        .with_data(serde_json::json!({"a": 1, "b": "two"}));
    let line = formatter.format(&record);

    assert!(line.contains("\n  Data: "));
    assert!(line.contains("\"a\": 1"));
}

#[test]
fn stack_block_renders_source_chain() {
    let io = std::io::Error::other("disk gone");
    let formatter = LineFormatter::new();
    let record = LogRecord::new(Level::Error, "FS", "write failed").with_error(&io);
    let line = formatter.format(&record);

    assert!(line.contains("\n  Stack: disk gone"));
}

#[derive(Debug)]
struct Outer(std::io::Error);

impl std::fmt::Display for Outer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request failed")
    }
}

impl std::error::Error for Outer {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn stack_block_includes_causes() {
    let err = Outer(std::io::Error::other("disk gone"));
    let formatter = LineFormatter::new();
    let record = LogRecord::new(Level::Error, "FS", "save failed").with_error(&err);
    let line = formatter.format(&record);

    assert!(line.contains("  Stack: request failed"));
    assert!(line.contains("caused by: disk gone"));
}

#[test]
fn raw_records_skip_the_template() {
    let formatter = LineFormatter::new();
    let record = LogRecord::bare("  plain item");
    assert_eq!(formatter.format(&record), "  plain item");
}
