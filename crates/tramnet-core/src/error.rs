//! Error types and exit codes for tramnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unrecognized query)
//! - 3: Data error (unknown stop or line, missing transition, unreachable target,
//!   inconsistent snapshot)

mod macros;

use std::fmt;

use thiserror::Error;

/// Exit codes for the tramnet binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the request was understood but the data does not exist (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Failure classes a caller can match on without inspecting messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown vertex, stop or line
    NotFound,
    /// Weight or transition requested/set on a non-adjacent pair
    NoSuchEdge,
    /// Adjacent stops on a line lack a recorded transition time
    MissingTransition,
    /// Target not connected to source
    Unreachable,
    /// Query text or argument does not match any recognized grammar
    InvalidQuery,
    /// Snapshot records contradict each other
    InvalidSnapshot,
    /// Anything else (io, parsing, configuration)
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::NoSuchEdge => "no_such_edge",
            ErrorKind::MissingTransition => "missing_transition",
            ErrorKind::Unreachable => "unreachable",
            ErrorKind::InvalidQuery => "invalid_query",
            ErrorKind::InvalidSnapshot => "invalid_snapshot",
            ErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during tramnet operations
#[derive(Error, Debug)]
pub enum TramError {
    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("no edge from {from} to {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("no transition time recorded between {from} and {to} on line {line}")]
    MissingTransition {
        line: String,
        from: String,
        to: String,
    },

    #[error("{to} is not reachable from {from}")]
    Unreachable { from: String, to: String },

    #[error("snapshot rejected: {count} issue(s), first: {first}")]
    InvalidSnapshot { count: usize, first: String },

    // Usage errors (exit code 2)
    #[error("unrecognized query: {0}")]
    InvalidQuery(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TramError {
    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl fmt::Display) -> Self {
        TramError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a missing edge
    pub fn no_such_edge(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        TramError::NoSuchEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        TramError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TramError::NotFound { .. } => ErrorKind::NotFound,
            TramError::NoSuchEdge { .. } => ErrorKind::NoSuchEdge,
            TramError::MissingTransition { .. } => ErrorKind::MissingTransition,
            TramError::Unreachable { .. } => ErrorKind::Unreachable,
            TramError::InvalidQuery(_) | TramError::InvalidValue { .. } => {
                ErrorKind::InvalidQuery
            }
            TramError::InvalidSnapshot { .. } => ErrorKind::InvalidSnapshot,
            TramError::Io(_)
            | TramError::Json(_)
            | TramError::Toml(_)
            | TramError::Other(_) => ErrorKind::Other,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::NotFound
            | ErrorKind::NoSuchEdge
            | ErrorKind::MissingTransition
            | ErrorKind::Unreachable
            | ErrorKind::InvalidSnapshot => ExitCode::Data,
            ErrorKind::InvalidQuery => ExitCode::Usage,
            ErrorKind::Other => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.kind().to_string(),
                "message": self.to_string(),
            }
        })
    }
}

/// A domain failure surfaced through the query interpreter.
///
/// Distinct from an unrecognized query: the text parsed, but the network
/// could not answer it.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct QueryError {
    inner: TramError,
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind()
    }

    pub fn inner(&self) -> &TramError {
        &self.inner
    }

    pub fn into_inner(self) -> TramError {
        self.inner
    }
}

impl From<TramError> for QueryError {
    fn from(inner: TramError) -> Self {
        QueryError { inner }
    }
}

/// Result type alias for tramnet operations
pub type Result<T> = std::result::Result<T, TramError>;
