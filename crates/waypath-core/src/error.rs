//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (heap misuse, IO, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Graph data error (duplicate/unknown vertices, dangling edges, unreachable targets)

mod macros;

use thiserror::Error;

/// Exit codes reported by the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Graph construction and query errors (exit code 3)
    #[error("duplicate vertex: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("relation {from} -> {to} references a vertex that is not in the graph")]
    DanglingEdge { from: String, to: String },

    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("relation {from} -> {to} has no weight in a weighted graph")]
    MissingWeight { from: String, to: String },

    #[error("vertex {vertex} is unreachable from the source")]
    Unreachable { vertex: String },

    #[error("path weight to vertex {vertex} exceeds {max}", max = u64::MAX)]
    WeightOverflow { vertex: String },

    // Heap and queue misuse (exit code 1)
    #[error("the heap is empty")]
    EmptyHeap,

    #[error("the element is not in the heap")]
    ElementNotFound,

    #[error("priority queue underflow")]
    Underflow,

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

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

impl WaypathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex the graph does not contain
    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        WaypathError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a target that was never reached by a traversal
    pub fn unreachable(vertex: impl std::fmt::Debug) -> Self {
        WaypathError::Unreachable {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a path whose total weight does not fit a distance
    pub fn weight_overflow(vertex: impl std::fmt::Debug) -> Self {
        WaypathError::WeightOverflow {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_)
            | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::DuplicateVertex { .. }
            | WaypathError::DanglingEdge { .. }
            | WaypathError::UnknownVertex { .. }
            | WaypathError::MissingWeight { .. }
            | WaypathError::Unreachable { .. }
            | WaypathError::WeightOverflow { .. } => ExitCode::Data,

            WaypathError::EmptyHeap
            | WaypathError::ElementNotFound
            | WaypathError::Underflow
            | WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::DuplicateVertex { .. } => "duplicate_vertex",
            WaypathError::DanglingEdge { .. } => "dangling_edge",
            WaypathError::UnknownVertex { .. } => "unknown_vertex",
            WaypathError::MissingWeight { .. } => "missing_weight",
            WaypathError::Unreachable { .. } => "unreachable",
            WaypathError::WeightOverflow { .. } => "weight_overflow",
            WaypathError::EmptyHeap => "empty_heap",
            WaypathError::ElementNotFound => "element_not_found",
            WaypathError::Underflow => "underflow",
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Other(_) => "other",
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
