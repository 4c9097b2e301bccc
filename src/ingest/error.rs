use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal ingestion failures. A bad row is never one of these; see [`MalformedRow`].
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Weather data file '{0}' could not be opened")]
    SourceUnavailable(PathBuf, #[source] std::io::Error),

    // The source opened fine but a later read failed
    #[error("Failed reading weather data")]
    Read(#[source] std::io::Error),
}

/// Why a single line was rejected during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid average temperature '{0}'")]
    InvalidTemperature(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// A rejected input line, handed to a [`crate::DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line number in the source, counting the header.
    pub line_number: usize,
    /// The offending line without its terminator. Invalid UTF-8 is replaced lossily.
    pub line: String,
    pub issue: RowIssue,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error parsing line {} ({}): {}",
            self.line_number, self.issue, self.line
        )
    }
}
