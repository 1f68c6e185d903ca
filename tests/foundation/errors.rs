//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use domovoy_foundation::{Error, ErrorContext, ErrorKind, Result};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_no_verb_parse() {
    let err = Error::no_verb_parse("лампу");
    assert!(matches!(err.kind, ErrorKind::NoVerbParse(ref w) if w == "лампу"));
    assert_eq!(err.to_string(), "no verb parse for word: лампу");
}

#[test]
fn error_no_inflection() {
    let err = Error::no_inflection("включать", "sing,impr,perf,excl");
    assert!(matches!(err.kind, ErrorKind::NoInflection { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("включать"));
    assert!(msg.contains("impr"));
}

#[test]
fn error_invalid_tag() {
    let err = Error::invalid_tag("NOUN,xyz", "unknown grammeme 'xyz'");
    assert!(matches!(err.kind, ErrorKind::InvalidTag { .. }));
    assert!(err.to_string().contains("xyz"));
}

#[test]
fn error_dictionary_line() {
    let err = Error::dictionary(7, "expected lexeme id");
    assert!(matches!(err.kind, ErrorKind::DictionaryError { line: 7, .. }));
    assert!(err.to_string().contains("line 7"));
}

#[test]
fn error_runtime_kinds() {
    assert!(matches!(Error::config("x").kind, ErrorKind::ConfigError(_)));
    assert!(matches!(Error::io("x").kind, ErrorKind::IoError(_)));
    assert!(matches!(Error::bus("x").kind, ErrorKind::BusError(_)));
    assert!(matches!(
        Error::invalid_catalogue("x").kind,
        ErrorKind::InvalidCatalogue(_)
    ));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    assert!(Error::bus("refused").context.is_none());
}

#[test]
fn context_renders_source_line_and_path() {
    let ctx = ErrorContext::new()
        .with_source("home.json")
        .with_line(3)
        .with_segment("включить")
        .with_segment("лампа");
    assert_eq!(ctx.to_string(), "at home.json:3 in включить > лампа");

    let err = Error::invalid_catalogue("item has an empty topic").with_context(ctx);
    let ctx = err.context.unwrap();
    assert_eq!(ctx.path, vec!["включить", "лампа"]);
}

#[test]
fn context_path_only() {
    let ctx = ErrorContext::default().with_segment("сделать");
    assert_eq!(ctx.to_string(), "in сделать");
}

// =============================================================================
// Propagation
// =============================================================================

fn first_word(text: &str) -> Result<&str> {
    text.split_whitespace()
        .next()
        .ok_or_else(|| Error::invalid_catalogue("empty command"))
}

#[test]
fn errors_propagate_with_question_mark() {
    fn run(text: &str) -> Result<usize> {
        Ok(first_word(text)?.chars().count())
    }
    assert_eq!(run("включить лампу").unwrap(), 8);
    assert!(run("   ").is_err());
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Error::io("disk"));
    assert_eq!(err.to_string(), "I/O error: disk");
}
