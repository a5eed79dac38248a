//! Errors raised while searching for and reporting on patterns
//!
//! `SearchFailure` is the internal signal passed between recursion levels.
//! `PredictError` is the structured error handed to callers.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NO_PATTERN: &str = "NO_PATTERN";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const CONFIG: &str = "CONFIG";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Why a single search level could not reach a constant sequence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchFailure {
    #[error("Not enough values to find pattern (got {len}, need at least 2)")]
    InsufficientData { len: usize },

    #[error("Found non-real number {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Search depth {depth} exceeds the configured limit")]
    DepthExceeded { depth: usize },

    #[error("No pattern can be found ({} operations tried)", .attempts.len())]
    NoPatternFound { attempts: Vec<Attempt> },
}

/// One operation tried at a search level, with the reason it failed
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub operation: String,
    pub failure: SearchFailure,
}

impl Attempt {
    pub fn new(operation: impl Into<String>, failure: SearchFailure) -> Self {
        Self {
            operation: operation.into(),
            failure,
        }
    }
}

impl SearchFailure {
    /// Attempts recorded at this level (empty for leaf failures)
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            SearchFailure::NoPatternFound { attempts } => attempts,
            _ => &[],
        }
    }

    /// Keep at most `levels` levels of nested attempts.
    ///
    /// The full failure tree grows with the search itself, so each level
    /// keeps only a shallow copy of what its children reported.
    pub fn truncated(self, levels: usize) -> Self {
        match self {
            SearchFailure::NoPatternFound { .. } if levels == 0 => {
                SearchFailure::NoPatternFound { attempts: Vec::new() }
            }
            SearchFailure::NoPatternFound { attempts } => SearchFailure::NoPatternFound {
                attempts: attempts
                    .into_iter()
                    .map(|a| Attempt::new(a.operation, a.failure.truncated(levels - 1)))
                    .collect(),
            },
            leaf => leaf,
        }
    }

    /// Indented, human-readable tree of the attempts behind this failure
    pub fn report(&self) -> String {
        let mut out = String::new();
        self.write_report(&mut out, 0);
        out
    }

    fn write_report(&self, out: &mut String, indent: usize) {
        let _ = writeln!(out, "{:width$}{}", "", self, width = indent * 2);
        for attempt in self.attempts() {
            let _ = writeln!(out, "{:width$}({}):", "", attempt.operation, width = indent * 2 + 2);
            attempt.failure.write_report(out, indent + 2);
        }
    }
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Input could not be explained, nothing was predicted
    Error,
    /// Setup problem, nothing can be predicted until it is fixed
    Fatal,
}

/// Structured error for callers of the predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Diagnostic notes, most specific last
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,

    pub severity: Severity,
}

impl PredictError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            notes: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add diagnostic note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn no_pattern() -> Self {
        Self::new(codes::NO_PATTERN, "No pattern can be found")
            .with_suggestion("Provide more values or check the sequence for typos")
    }

    pub fn invalid_token(token: &str, reason: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_TOKEN,
            format!("Invalid token \"{}\": {}", token, reason.into()),
        )
        .with_suggestion("Use decimals like 1.5 or fractions like 3/4 and 2 1/5")
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG, format!("Configuration error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }

    pub fn is_no_pattern(&self) -> bool {
        self.code == codes::NO_PATTERN
    }
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for PredictError {}

impl From<SearchFailure> for PredictError {
    fn from(failure: SearchFailure) -> Self {
        let err = Self::no_pattern();
        match failure {
            SearchFailure::NoPatternFound { ref attempts } if !attempts.is_empty() => {
                attempts.iter().fold(err, |err, attempt| {
                    err.with_note(format!("({}): {}", attempt.operation, attempt.failure))
                })
            }
            other => err.with_note(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> SearchFailure {
        SearchFailure::NoPatternFound {
            attempts: vec![
                Attempt::new(
                    "a-b",
                    SearchFailure::NoPatternFound {
                        attempts: vec![Attempt::new(
                            "a-b",
                            SearchFailure::NoPatternFound {
                                attempts: vec![Attempt::new(
                                    "a-b",
                                    SearchFailure::InsufficientData { len: 1 },
                                )],
                            },
                        )],
                    },
                ),
                Attempt::new("1/a", SearchFailure::NonFiniteValue { index: 0, value: f64::INFINITY }),
            ],
        }
    }

    #[test]
    fn test_display_leaf_failures() {
        let err = SearchFailure::InsufficientData { len: 1 };
        assert!(err.to_string().contains("got 1"));
        let err = SearchFailure::NonFiniteValue { index: 2, value: f64::NAN };
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_truncated_to_nothing() {
        assert!(nested().truncated(0).attempts().is_empty());
    }

    #[test]
    fn test_truncated_keeps_leaf_reasons() {
        let shallow = nested().truncated(1);
        let attempts = shallow.attempts();
        assert_eq!(attempts.len(), 2);
        assert!(attempts[0].failure.attempts().is_empty());
        assert!(matches!(attempts[1].failure, SearchFailure::NonFiniteValue { .. }));
    }

    #[test]
    fn test_truncated_two_levels() {
        let shallow = nested().truncated(2);
        let child = &shallow.attempts()[0].failure;
        assert_eq!(child.attempts().len(), 1);
        assert!(child.attempts()[0].failure.attempts().is_empty());
    }

    #[test]
    fn test_report_lists_operations() {
        let report = nested().report();
        assert!(report.contains("(a-b):"));
        assert!(report.contains("(1/a):"));
        assert!(report.contains("non-real"));
    }

    #[test]
    fn test_from_search_failure_notes() {
        let err: PredictError = nested().into();
        assert_eq!(err.code, codes::NO_PATTERN);
        assert_eq!(err.notes.len(), 2);
        assert!(err.notes[1].starts_with("(1/a)"));

        let err: PredictError = SearchFailure::InsufficientData { len: 0 }.into();
        assert!(err.is_no_pattern());
        assert_eq!(err.notes.len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = PredictError::invalid_token("x", "Not a valid number");
        let display = format!("{}", err);
        assert!(display.contains("INVALID_TOKEN"));
        assert!(display.contains("\"x\""));
    }

    #[test]
    fn test_error_serializes_without_empty_fields() {
        let err = PredictError::new(codes::INTERNAL, "boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert_eq!(json["severity"], "error");
        assert!(json.get("notes").is_none());
        assert!(json.get("suggestion").is_none());
    }
}
