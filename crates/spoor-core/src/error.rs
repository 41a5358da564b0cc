//! Error types and exit codes for spoor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable or malformed edge list)
//!
//! An unreachable target is NOT an error: searches report it through the
//! `SearchResult` type and the process still exits 0.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per spoor convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable or malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during spoor operations
#[derive(Error, Debug)]
pub enum SpoorError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: bfs, dfs, or dijkstra)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    #[error("no edge list specified (use --edges <PATH> or set SPOOR_EDGES)")]
    EdgeListNotSpecified,

    // Data errors (exit code 3)
    #[error("cannot read edge list {path:?}: {reason}")]
    EdgeListUnreadable { path: PathBuf, reason: String },

    #[error("invalid edge on line {line}: {reason}")]
    InvalidEdge { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SpoorError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            SpoorError::UnknownFormat(_)
            | SpoorError::UnknownStrategy(_)
            | SpoorError::UsageError(_)
            | SpoorError::EdgeListNotSpecified => ExitCode::Usage,

            // Data errors
            SpoorError::EdgeListUnreadable { .. } | SpoorError::InvalidEdge { .. } => {
                ExitCode::Data
            }

            // Generic failures
            SpoorError::Io(_) | SpoorError::Json(_) | SpoorError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SpoorError::UnknownFormat(_) => "unknown_format",
            SpoorError::UnknownStrategy(_) => "unknown_strategy",
            SpoorError::UsageError(_) => "usage_error",
            SpoorError::EdgeListNotSpecified => "edge_list_not_specified",
            SpoorError::EdgeListUnreadable { .. } => "edge_list_unreadable",
            SpoorError::InvalidEdge { .. } => "invalid_edge",
            SpoorError::Io(_) => "io_error",
            SpoorError::Json(_) => "json_error",
            SpoorError::Other(_) => "other",
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

/// Result type alias for spoor operations
pub type Result<T> = std::result::Result<T, SpoorError>;
