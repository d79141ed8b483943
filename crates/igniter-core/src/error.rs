//! Error types for the igniter.
//!
//! The tracker itself is infallible; errors only arise where configuration
//! and persisted state enter the system.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading or applying engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Engine name cannot be empty")]
    EmptyEngineName,

    #[error("Engine '{name}' is configured more than once")]
    DuplicateEngine { name: String },

    #[error("No engine named '{name}'")]
    UnknownEngine { name: String },
}
