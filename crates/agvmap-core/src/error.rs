//! Error handling for AGVMap
//!
//! Provides the error types shared by the editor crates:
//! - Canvas errors (referential failures inside the graph store)
//! - API errors (backend envelope / transport failures)
//!
//! All error types use `thiserror` for ergonomic error handling. Looking up
//! a node, path, or map by an id that no longer exists is deliberately *not*
//! an error anywhere in the editor — stale UI references are treated as
//! silent no-ops.

use thiserror::Error;

/// Canvas store error type
///
/// Represents referential failures raised by graph mutations. These are
/// fatal to the single operation, never to the session; the form layer is
/// expected to catch them and surface a validation message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// A path edge was created against business numbers that do not resolve
    /// to live nodes.
    #[error("start or end node does not exist: {start} -> {end}")]
    MissingEndpoint {
        /// Requested start-node business number.
        start: i64,
        /// Requested end-node business number.
        end: i64,
    },
}

/// Backend API error type
///
/// Represents failures of the map persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The envelope carried a non-success code.
    #[error("backend returned code {code}: {message}")]
    Status {
        /// Envelope `code` field.
        code: i32,
        /// Envelope `message` field.
        message: String,
    },

    /// The payload could not be decoded into the expected shape.
    #[error("malformed response: {reason}")]
    MalformedResponse {
        /// What failed to decode.
        reason: String,
    },
}

/// Main error type for AGVMap
///
/// A unified error type that can represent any error from the editor core.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas store error
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Backend API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a canvas referential error
    pub fn is_canvas_error(&self) -> bool {
        matches!(self, Error::Canvas(_))
    }

    /// Check if this is a backend API error
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
