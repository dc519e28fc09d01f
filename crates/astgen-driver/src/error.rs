//! Driver error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading requests or writing generated modules.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A request file is not valid JSON for an emission request.
    #[error("invalid request file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No built-in family has this name.
    #[error("unknown AST family '{0}' (expected one of: expr, stmt)")]
    UnknownFamily(String),
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;
