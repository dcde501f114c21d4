//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::source::SourceError;
use crate::error::{
    report_error, set_error_reporter, DictionaryError, ErrorContext, ErrorReporter,
    TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = DictionaryError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep their messages.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = DictionaryError::from(SourceError::Read {
        path: PathBuf::from("words.txt"),
        source: io_error,
    });

    let error_string = error.to_string();
    assert!(error_string.starts_with("Word source error"));
    assert!(error_string.contains("words.txt"));
    assert!(error_string.contains("file not found"));
}

/// Test the messages of the non-source error kinds.
#[test]
fn test_error_display() {
    let error = DictionaryError::InvalidArgument("separator must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid argument: separator must not be empty"
    );

    let error = DictionaryError::from(ConfigError::ValidationError("bad".to_string()));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad"
    );

    let error = DictionaryError::from(SourceError::NotConfigured);
    assert_eq!(
        error.to_string(),
        "Word source error: No word source path configured"
    );
}

/// Test that every configuration error kind renders its own message.
#[test]
fn test_config_error_kinds() {
    let errors = [
        ConfigError::FileNotFound(PathBuf::from("dictionary.toml")),
        ConfigError::ParseError("bad toml".to_string()),
        ConfigError::ValidationError("empty separator".to_string()),
    ];

    for error in errors {
        let expected = match &error {
            ConfigError::FileNotFound(_) => "Configuration file not found: dictionary.toml",
            ConfigError::ParseError(_) => "Failed to parse configuration file: bad toml",
            ConfigError::ValidationError(_) => "Configuration validation error: empty separator",
        };
        assert_eq!(error.to_string(), expected);
    }
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reported errors.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = DictionaryError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert!(reporter.reported_count.load(Ordering::SeqCst) >= 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = DictionaryError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}
