use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading and shaping MCA results
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Parallel sequences within one entity have unequal lengths
    #[error("shape mismatch in {entity}: {detail}")]
    ShapeMismatch {
        entity: &'static str,
        detail: String,
    },

    /// A required configuration value is empty or unusable
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A result document could not be read
    #[error("failed to read {path}: {source}")]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result document could not be parsed as JSON
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Wire-level inconsistency inside an otherwise well-formed document
    #[error("data error: {0}")]
    Data(String),

    /// I/O error while writing the rendered page
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
