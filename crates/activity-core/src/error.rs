use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the activity statistics pipeline.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// The activity log could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line split into fewer than the five required tab-separated fields.
    #[error("Line {line}: expected at least 5 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A timestamp field did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("Line {line}: invalid {field} \"{value}\": {reason}")]
    TimestampParse {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The activity label field was present but empty.
    #[error("Line {line}: activity label is empty")]
    EmptyLabel { line: usize },

    /// The monitoring span was requested over zero records.
    #[error("Cannot compute monitoring span: no records")]
    EmptyInput,

    /// A report could not be serialised to JSON.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ActivityError {
    /// `true` for the errors raised while turning a single line into a record.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::FieldCount { .. } | Self::TimestampParse { .. } | Self::EmptyLabel { .. }
        )
    }

    /// Re-tag a line-level error with its 1-based position in the source file.
    ///
    /// Errors that are not tied to a line are returned unchanged.
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::FieldCount { found, .. } => Self::FieldCount {
                line: line_no,
                found,
            },
            Self::TimestampParse {
                field,
                value,
                reason,
                ..
            } => Self::TimestampParse {
                line: line_no,
                field,
                value,
                reason,
            },
            Self::EmptyLabel { .. } => Self::EmptyLabel { line: line_no },
            other => other,
        }
    }
}

/// Convenience alias used throughout the activity crates.
pub type Result<T> = std::result::Result<T, ActivityError>;
