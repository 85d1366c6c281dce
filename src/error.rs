use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

/// Fatal errors raised while loading or analysing an export.
///
/// Every variant aborts the run; there is no partial-result mode.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("No .json files found in {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid export document {}: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Encoding error: {0}")]
    Encoding(#[from] RecodeError),

    #[error("No message carries a usable timestamp_ms")]
    EmptySeries,

    #[error(
        "Message timestamps span days {first_day} to {last_day}, more than {max_days} days; \
         check for corrupt or non-millisecond timestamp_ms values"
    )]
    SpanTooLarge { first_day: i64, last_day: i64, max_days: usize },

    #[error("Smoothing window of {window} days exceeds the {len}-day series")]
    InsufficientData { window: usize, len: usize },

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

/// Failure to repair a single string, located inside the JSON document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {location}")]
pub struct RecodeError {
    pub location: String,
    pub kind: RecodeErrorKind,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecodeErrorKind {
    #[error("character {ch:?} at offset {offset} is outside the single-byte range")]
    CodePointOutOfRange { ch: char, offset: usize },

    #[error("byte sequence is not valid {encoding} (valid up to byte {valid_up_to})")]
    InvalidSequence { encoding: &'static str, valid_up_to: usize },
}

impl RecodeError {
    pub(crate) fn new(kind: RecodeErrorKind) -> Self {
        Self { location: String::from("$"), kind }
    }

    /// Prefix the location with an enclosing path segment while unwinding.
    pub(crate) fn within(mut self, segment: &str) -> Self {
        // Locations are built leaf first: "$" -> "$.content" -> "$.messages[3].content"
        let rest = self.location.strip_prefix('$').unwrap_or(&self.location);
        self.location = format!("${}{}", segment, rest);
        self
    }
}
