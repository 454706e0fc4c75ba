//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph description)

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes reported by the trellis CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph description (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex index {index} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        index: VertexId,
        vertex_count: usize,
    },

    #[error("expected {expected} entries, got {actual}: {context}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid graph description at line {line}: {reason}")]
    InvalidDescription { line: usize, reason: String },

    #[error("cannot read {path:?}: {reason}")]
    UnreadableInput { path: PathBuf, reason: String },

    // Priority queue contract violations (exit code 1): these indicate a
    // bug in the calling algorithm, not bad input.
    #[error("priority queue is empty")]
    QueueEmpty,

    #[error("vertex {0} is already queued")]
    QueueDuplicate(VertexId),

    #[error("vertex {0} is not queued")]
    QueueMissing(VertexId),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    /// Create an error for an out-of-range vertex reference
    pub fn vertex_out_of_range(index: VertexId, vertex_count: usize) -> Self {
        TrellisError::VertexOutOfRange {
            index,
            vertex_count,
        }
    }

    /// Create an error for a weight/heuristic vector of the wrong length
    pub fn length_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        TrellisError::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for a malformed graph description line
    pub fn invalid_description(line: usize, reason: impl std::fmt::Display) -> Self {
        TrellisError::InvalidDescription {
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrellisError::UsageError(_) => ExitCode::Usage,

            TrellisError::VertexOutOfRange { .. }
            | TrellisError::LengthMismatch { .. }
            | TrellisError::InvalidDescription { .. }
            | TrellisError::UnreadableInput { .. } => ExitCode::Data,

            TrellisError::QueueEmpty
            | TrellisError::QueueDuplicate(_)
            | TrellisError::QueueMissing(_)
            | TrellisError::Io(_)
            | TrellisError::Json(_)
            | TrellisError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in structured output
    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::UsageError(_) => "usage_error",
            TrellisError::VertexOutOfRange { .. } => "vertex_out_of_range",
            TrellisError::LengthMismatch { .. } => "length_mismatch",
            TrellisError::InvalidDescription { .. } => "invalid_description",
            TrellisError::UnreadableInput { .. } => "unreadable_input",
            TrellisError::QueueEmpty => "queue_empty",
            TrellisError::QueueDuplicate(_) => "queue_duplicate",
            TrellisError::QueueMissing(_) => "queue_missing",
            TrellisError::Io(_) => "io_error",
            TrellisError::Json(_) => "json_error",
            TrellisError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;
