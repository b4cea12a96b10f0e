//! Error types and exit codes for roam-alfred
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown category, invalid item JSON)
//! - 3: Data/store error (notes or history store unreachable, failed query)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the launcher tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - store missing or unreadable (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for RoamError {
    fn from(err: rusqlite::Error) -> Self {
        RoamError::QueryFailed {
            operation: "run query".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur while building launcher results
#[derive(Error, Debug)]
pub enum RoamError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unknown {context}: {value} (expected: {expected})")]
    UnknownValue {
        context: String,
        value: String,
        expected: String,
    },

    #[error("invalid {context}: {reason}")]
    InvalidValue { context: String, reason: String },

    // Data/store errors (exit code 3)
    #[error("{store} unavailable at {path:?}: {reason}")]
    StoreUnavailable {
        store: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("failed to {operation}: {reason}")]
    QueryFailed { operation: String, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("{command} failed: {reason}")]
    Automation { command: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl RoamError {
    /// Create an error for a failed store query
    pub fn query_failed(operation: &str, error: impl std::fmt::Display) -> Self {
        RoamError::QueryFailed {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a store that cannot be opened
    pub fn store_unavailable(
        store: &'static str,
        path: impl Into<PathBuf>,
        error: impl std::fmt::Display,
    ) -> Self {
        RoamError::StoreUnavailable {
            store,
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, reason: impl std::fmt::Display) -> Self {
        RoamError::InvalidValue {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a value outside the accepted set
    pub fn unknown_value(
        context: &str,
        value: impl std::fmt::Display,
        expected: impl std::fmt::Display,
    ) -> Self {
        RoamError::UnknownValue {
            context: context.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RoamError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed subprocess
    pub fn automation(command: &str, reason: impl std::fmt::Display) -> Self {
        RoamError::Automation {
            command: command.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoamError::UsageError(_)
            | RoamError::UnknownValue { .. }
            | RoamError::InvalidValue { .. } => ExitCode::Usage,

            RoamError::StoreUnavailable { .. }
            | RoamError::QueryFailed { .. }
            | RoamError::NotFound { .. } => ExitCode::Data,

            RoamError::Io(_)
            | RoamError::Json(_)
            | RoamError::Toml(_)
            | RoamError::Regex(_)
            | RoamError::Automation { .. }
            | RoamError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoamError::UsageError(_) => "usage_error",
            RoamError::UnknownValue { .. } => "unknown_value",
            RoamError::InvalidValue { .. } => "invalid_value",
            RoamError::StoreUnavailable { .. } => "store_unavailable",
            RoamError::QueryFailed { .. } => "query_failed",
            RoamError::NotFound { .. } => "not_found",
            RoamError::Io(_) => "io_error",
            RoamError::Json(_) => "json_error",
            RoamError::Toml(_) => "toml_error",
            RoamError::Regex(_) => "regex_error",
            RoamError::Automation { .. } => "automation_error",
            RoamError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for roam-alfred operations
pub type Result<T> = std::result::Result<T, RoamError>;
